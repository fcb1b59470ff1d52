//! Core regeneration engine.
//!
//! ## Module Structure
//!
//! - `content`: ContentSource collaborator and filesystem helpers
//! - `data`: TranslationTable and Diagnostic
//! - `parsers`: `.lang` parser and auxiliary (badge) merger
//! - `pseudo`: pseudolocalization transform
//! - `emit`: `.lang`, JSON and TypeScript renderings
//! - `drift`: comparison of renderings against disk
//! - `pipeline`: the end-to-end run

pub mod content;
pub mod data;
pub mod drift;
pub mod emit;
pub mod parsers;
pub mod pipeline;
pub mod pseudo;

pub use content::{ContentSource, FsSource, list_item_dirs};
pub use data::{Diagnostic, LanguageValues, PSEUDO_LANGUAGE, TranslationTable};
pub use drift::{DRIFT_LABEL, DriftReport, detect_drift};
pub use emit::{Artifact, ArtifactFormat, emit_all};
pub use pipeline::{build_table, run_pipeline};
pub use pseudo::pseudolocalize;
