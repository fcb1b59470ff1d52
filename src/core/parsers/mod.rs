//! Parsers for translation sources.
//!
//! - `lang`: `.lang` source files (`key = "value"` lines), one per language
//! - `auxiliary`: per-item localization documents (badge names and descriptions)

pub mod auxiliary;
pub mod lang;

pub use auxiliary::merge_auxiliary_entries;
pub use lang::{parse_lang_file, parse_sources};
