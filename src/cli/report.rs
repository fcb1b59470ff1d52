//! Report formatting and printing utilities.
//!
//! Displays diagnostics and drift in cargo-style format. Kept separate from
//! the core so langsync can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, FixSummary, InitSummary, PipelineOutcome,
    PseudoSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Diagnostic, DriftReport};
use crate::issues::{LintError, Rule};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the diagnostics of a failed validation phase to a custom writer.
pub fn report_diagnostics_to<W: Write>(err: &LintError, writer: &mut W) {
    let diagnostics = err.diagnostics();
    let rule = err.rule().map(|rule| rule.to_string()).unwrap_or_default();
    let max_line_width = diagnostics
        .iter()
        .filter_map(|d| d.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for diagnostic in diagnostics {
        print_diagnostic(diagnostic, &rule, writer, max_line_width);
    }

    let total = diagnostics.len();
    let _ = writeln!(
        writer,
        "{} {} {}: {}",
        FAILURE_MARK.red(),
        total,
        if total == 1 { "problem" } else { "problems" },
        err
    );
    let hint = if err.is_fixable() {
        "add the missing entries to the listed files, then run langsync again"
    } else {
        "these lines must be corrected by hand before anything can be regenerated"
    };
    let _ = writeln!(writer, "{} {}", "hint:".bold().cyan(), hint);
}

fn print_diagnostic<W: Write>(
    diagnostic: &Diagnostic,
    rule: &str,
    writer: &mut W,
    max_line_width: usize,
) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "error".bold().red(),
        diagnostic.message,
        rule.dimmed().cyan()
    );

    match diagnostic.line {
        Some(line) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), diagnostic.file_path, line);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), diagnostic.file_path);
        }
    }

    if let (Some(line), Some(source_line)) = (diagnostic.line, &diagnostic.source_line)
        && !source_line.is_empty()
    {
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );
        let underline = "^".repeat(UnicodeWidthStr::width(source_line.as_str()).max(1));
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            "",
            "|".blue(),
            underline.red(),
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between diagnostics
}

/// Locate the first line that differs between two versions of a file.
///
/// Returns the 1-based line number with the generated and on-disk text of
/// that line (empty when one side has fewer lines).
pub fn first_difference(original: &[u8], generated: &[u8]) -> Option<(usize, String, String)> {
    if original == generated {
        return None;
    }
    let original_lines: Vec<&[u8]> = original.split(|byte| *byte == b'\n').collect();
    let generated_lines: Vec<&[u8]> = generated.split(|byte| *byte == b'\n').collect();
    let count = original_lines.len().max(generated_lines.len());

    (0..count).find_map(|index| {
        let found = original_lines.get(index).copied().unwrap_or_default();
        let expected = generated_lines.get(index).copied().unwrap_or_default();
        (found != expected
            || original_lines.get(index).is_none()
            || generated_lines.get(index).is_none())
        .then(|| {
            (
                index + 1,
                String::from_utf8_lossy(expected).into_owned(),
                String::from_utf8_lossy(found).into_owned(),
            )
        })
    })
}

/// Print one entry per drifted artifact to a custom writer.
pub fn report_drift_to<W: Write>(report: &DriftReport, verbose: bool, writer: &mut W) {
    for (path, generated) in &report.new_contents {
        let original = report
            .original_contents
            .get(path)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let _ = writeln!(
            writer,
            "{}: Entries in {} do not match the translation sources  {}",
            "error".bold().red(),
            path,
            Rule::Drift.to_string().dimmed().cyan()
        );

        match first_difference(original, generated) {
            Some((line, expected, found)) => {
                let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, line);
                let _ = writeln!(writer, "   {} {} {}", "=".blue(), "expected:".bold(), expected);
                let _ = writeln!(writer, "   {} {} {}", "=".blue(), "found:".bold(), found);
            }
            None => {
                let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
            }
        }

        if verbose {
            let _ = writeln!(
                writer,
                "   {} {} {} bytes on disk, {} bytes generated",
                "=".blue(),
                "note:".bold(),
                original.len(),
                generated.len()
            );
        }

        let _ = writeln!(writer);
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, verbose, stdout),
        CommandSummary::Fix(summary) => print_fix(summary, verbose, stdout),
        CommandSummary::Init(summary) => print_init(summary),
        CommandSummary::Pseudo(summary) => print_pseudo(summary),
    }
}

/// Print the outcome of `check` to a custom writer.
pub fn print_check<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    match &summary.outcome {
        PipelineOutcome::Invalid(err) => report_diagnostics_to(err, writer),
        PipelineOutcome::Checked(report) if report.is_clean() => {
            print_up_to_date(summary.artifacts_checked, writer);
        }
        PipelineOutcome::Checked(report) => {
            report_drift_to(report, verbose, writer);
            let _ = writeln!(
                writer,
                "{} {} of {} generated {} out of date (run {} to regenerate)",
                FAILURE_MARK.red(),
                report.len(),
                summary.artifacts_checked,
                if summary.artifacts_checked == 1 { "file is" } else { "files are" },
                "langsync fix".cyan()
            );
        }
    }
}

/// Print the outcome of `fix` to a custom writer.
pub fn print_fix<W: Write>(summary: &FixSummary, verbose: bool, writer: &mut W) {
    let check = &summary.check;
    match &check.outcome {
        PipelineOutcome::Checked(report) if summary.applied => {
            for path in report.paths() {
                let _ = writeln!(writer, "{} {}", "Regenerated".green().bold(), path);
            }
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Regenerated {} of {} generated {}",
                    report.len(),
                    check.artifacts_checked,
                    if check.artifacts_checked == 1 { "file" } else { "files" }
                )
                .green()
            );
        }
        PipelineOutcome::Checked(report) if !report.is_clean() => {
            report_drift_to(report, verbose, writer);
            let _ = writeln!(
                writer,
                "{} {} file(s):",
                "Would regenerate".yellow().bold(),
                report.len()
            );
            for path in report.paths() {
                let _ = writeln!(writer, "  - {}", path);
            }
            let _ = writeln!(writer, "Run without {} to write these files.", "--dry-run".cyan());
        }
        _ => print_check(check, verbose, writer),
    }
}

fn print_up_to_date<W: Write>(artifacts_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} generated {} - all up to date",
            artifacts_checked,
            if artifacts_checked == 1 { "file" } else { "files" }
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn print_pseudo(summary: &PseudoSummary) {
    for line in &summary.lines {
        println!("{}", line);
    }
}
