//! The regeneration pipeline.
//!
//! parse -> merge auxiliary entries -> check coverage and synthesize the
//! pseudolocale -> emit -> compare with disk.
//!
//! Each run builds its own table from scratch. A failing validation phase
//! stops the run before anything is emitted.

use tracing::debug;

use crate::{
    config::Config,
    core::{
        ContentSource, TranslationTable,
        drift::{DriftReport, detect_drift},
        emit::emit_all,
        parsers::{merge_auxiliary_entries, parse_sources},
    },
    issues::LintError,
    rules::check_missing_entries,
};

/// Build the checked translation table, including the pseudolocale.
pub fn build_table(
    config: &Config,
    source: &impl ContentSource,
    items: &[String],
) -> Result<TranslationTable, LintError> {
    let mut table = parse_sources(config, source)?;
    merge_auxiliary_entries(&mut table, config, source, items)?;
    check_missing_entries(&mut table, config)?;
    debug!(keys = table.len(), "translation table checked");
    Ok(table)
}

/// Run the whole pipeline and report which artifacts drifted from disk.
///
/// `items` are the auxiliary item names (see [`crate::core::list_item_dirs`]).
pub fn run_pipeline(
    config: &Config,
    source: &impl ContentSource,
    items: &[String],
) -> Result<DriftReport, LintError> {
    let table = build_table(config, source, items)?;
    let artifacts = emit_all(&table, config).map_err(LintError::Render)?;
    debug!(artifacts = artifacts.len(), "rendered artifacts");
    let report = detect_drift(&artifacts, source)?;
    Ok(report)
}
