use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::{CheckCommand, CommonArgs};
use super::{CheckSummary, CommandKind, CommandResult, CommandSummary, PipelineOutcome};
use crate::{
    config::load_config,
    core::{
        FsSource,
        emit::{ArtifactFormat, output_languages},
        list_item_dirs, run_pipeline,
    },
};

/// Load configuration and run the pipeline against the project on disk.
///
/// Validation failures are part of the returned summary; unreadable files
/// and broken auxiliary documents are returned as errors.
pub fn run_checks(common: &CommonArgs) -> Result<CheckSummary> {
    let start_dir = match &common.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let loaded = load_config(&start_dir)?;
    let config = loaded.config;
    let root = loaded.root;
    debug!(root = %root.display(), from_file = loaded.from_file, "configuration loaded");

    let items = list_item_dirs(&root.join(&config.auxiliary_root))?;
    let source = FsSource::new(&root);

    let outcome = match run_pipeline(&config, &source, &items) {
        Ok(report) => PipelineOutcome::Checked(report),
        Err(err) if !err.diagnostics().is_empty() => PipelineOutcome::Invalid(err),
        Err(err) => return Err(err.into()),
    };

    let artifacts_checked = match outcome {
        PipelineOutcome::Checked(_) => output_languages(&config).len() * ArtifactFormat::ALL.len(),
        PipelineOutcome::Invalid(_) => 0,
    };

    Ok(CheckSummary {
        outcome,
        root,
        artifacts_checked,
    })
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let summary = run_checks(&cmd.common)?;
    let error_count = summary.problem_count(false);

    Ok(CommandResult {
        kind: CommandKind::Check,
        summary: CommandSummary::Check(summary),
        error_count,
        exit_on_errors: true,
    })
}
