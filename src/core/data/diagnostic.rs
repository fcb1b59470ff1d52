use std::fmt;

/// A single problem found in a translation source file.
///
/// Diagnostics are collected across a whole phase and surfaced together
/// through [`crate::issues::LintError`], never one at a time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Diagnostic {
    /// Path of the file the problem refers to (e.g., "frontend/templates/pt.lang").
    pub file_path: String,
    /// Line number (1-indexed), when the problem is tied to a line.
    pub line: Option<usize>,
    pub message: String,
    /// The offending line, trimmed.
    pub source_line: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line: None,
            message: message.into(),
            source_line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source_line(mut self, source_line: impl Into<String>) -> Self {
        self.source_line = Some(source_line.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.file_path, line, self.message),
            None => write!(f, "{}: {}", self.file_path, self.message),
        }
    }
}
