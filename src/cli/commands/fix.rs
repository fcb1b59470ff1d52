use anyhow::Result;

use super::super::args::FixCommand;
use super::{
    CommandKind, CommandResult, CommandSummary, FixSummary, PipelineOutcome, check::run_checks,
};

/// Run the checks, then write every drifted artifact back to disk.
///
/// Nothing is written when validation fails or with `--dry-run`.
pub fn fix(cmd: FixCommand) -> Result<CommandResult> {
    let check = run_checks(&cmd.common)?;

    let applied = match &check.outcome {
        PipelineOutcome::Checked(report) if !cmd.dry_run && !report.is_clean() => {
            report.apply(&check.root)?;
            true
        }
        _ => false,
    };
    let error_count = check.problem_count(applied);

    Ok(CommandResult {
        kind: CommandKind::Fix,
        summary: CommandSummary::Fix(FixSummary { check, applied }),
        error_count,
        exit_on_errors: true,
    })
}
