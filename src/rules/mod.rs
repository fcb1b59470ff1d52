//! Validation rules over the merged translation table.
//!
//! - `missing_entries`: every key must have a value in every required language;
//!   also synthesizes the pseudolocale for complete keys

pub mod missing_entries;

pub use missing_entries::check_missing_entries;
