//! Error types for the regeneration pipeline.
//!
//! Validation phases never fail on the first problem: they collect every
//! [`Diagnostic`] and then fail once with the whole batch. The reporter
//! prints each diagnostic in cargo style.

use thiserror::Error;

use crate::core::Diagnostic;

/// Rule identifier for each failure kind, shown next to every diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    InvalidSource,
    MissingEntry,
    Drift,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::InvalidSource => write!(f, "invalid-source"),
            Rule::MissingEntry => write!(f, "missing-entry"),
            Rule::Drift => write!(f, "drift"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LintError {
    /// One or more `.lang` lines failed to parse. A human must edit the source.
    #[error("Invalid i18n files")]
    InvalidSources { diagnostics: Vec<Diagnostic> },

    /// Some keys lack a value in a required language.
    #[error("There are missing items in some files")]
    MissingEntries { diagnostics: Vec<Diagnostic> },

    /// An auxiliary localization document is not valid JSON of the expected shape.
    #[error("Invalid auxiliary localization file: {path}")]
    AuxiliaryJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// An auxiliary localization document has no entry for a required language.
    #[error("Auxiliary localization file {path} has no entry for '{language}'")]
    AuxiliaryMissingLanguage { path: String, language: String },

    /// A generated artifact could not be serialized.
    #[error("Failed to render generated artifacts")]
    Render(#[source] std::io::Error),

    /// The content source failed to provide a file.
    #[error(transparent)]
    Fetch(#[from] anyhow::Error),
}

impl LintError {
    /// Diagnostics carried by the error, empty for non-aggregate errors.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            LintError::InvalidSources { diagnostics }
            | LintError::MissingEntries { diagnostics } => diagnostics,
            LintError::AuxiliaryJson { .. }
            | LintError::AuxiliaryMissingLanguage { .. }
            | LintError::Render(_)
            | LintError::Fetch(_) => &[],
        }
    }

    /// Advisory flag for callers: whether rerunning after a human fix is expected to succeed.
    ///
    /// Malformed sources are never fixable by regeneration; missing entries are.
    pub fn is_fixable(&self) -> bool {
        matches!(self, LintError::MissingEntries { .. })
    }

    pub fn rule(&self) -> Option<Rule> {
        match self {
            LintError::InvalidSources { .. } => Some(Rule::InvalidSource),
            LintError::MissingEntries { .. } => Some(Rule::MissingEntry),
            LintError::AuxiliaryJson { .. }
            | LintError::AuxiliaryMissingLanguage { .. }
            | LintError::Render(_)
            | LintError::Fetch(_) => None,
        }
    }
}
