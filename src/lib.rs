//! langsync - translation artifact checker and generator
//!
//! langsync parses per-language `.lang` translation sources, merges badge
//! localizations, verifies that every key is translated into every required
//! language, synthesizes a `pseudo` locale, and regenerates the sorted
//! `.lang`, JSON and TypeScript artifacts, reporting any that drifted.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, pseudolocalization, emission and drift detection
//! - `issues`: Error types carrying aggregated diagnostics
//! - `rules`: Validation rules over the translation table

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
