use std::path::PathBuf;

use crate::{core::DriftReport, issues::LintError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Check,
    Fix,
    Init,
    Pseudo,
}

/// What a pipeline run produced, when it did not fail internally.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// A validation phase failed; nothing was emitted.
    Invalid(LintError),
    /// Sources are valid; the report lists drifted artifacts (possibly none).
    Checked(DriftReport),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub outcome: PipelineOutcome,
    /// Project root the artifact paths are relative to.
    pub root: PathBuf,
    /// Number of artifacts compared against disk (0 if validation failed).
    pub artifacts_checked: usize,
}

#[derive(Debug)]
pub struct FixSummary {
    pub check: CheckSummary,
    /// True if new contents were written to disk.
    pub applied: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub struct PseudoSummary {
    pub lines: Vec<String>,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Fix(FixSummary),
    Init(InitSummary),
    Pseudo(PseudoSummary),
}

/// Result of running langsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// Validation diagnostics plus drifted files left on disk.
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}

impl CheckSummary {
    /// Problems still present after the command ran.
    ///
    /// For `fix`, drift that was written back no longer counts.
    pub fn problem_count(&self, drift_resolved: bool) -> usize {
        match &self.outcome {
            PipelineOutcome::Invalid(err) => err.diagnostics().len().max(1),
            PipelineOutcome::Checked(_) if drift_resolved => 0,
            PipelineOutcome::Checked(report) => report.len(),
        }
    }
}
