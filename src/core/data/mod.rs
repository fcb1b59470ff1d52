//! Core data types used across all pipeline phases.
//!
//! ## Module Structure
//!
//! - `diagnostic`: Diagnostic (one problem found while parsing or checking)
//! - `table`: TranslationTable (key -> language -> value)

pub mod diagnostic;
pub mod table;

pub use diagnostic::Diagnostic;
pub use table::{LanguageValues, PSEUDO_LANGUAGE, TranslationTable};
