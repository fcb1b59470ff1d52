//! Auxiliary translation sources.
//!
//! Some translations do not live in `.lang` files: each badge directory has
//! a `localizations.json` with its name and description in every language.
//! They are folded into the table as `<prefix>_<item>_name` and
//! `<prefix>_<item>_description`.
//!
//! Auxiliary documents are authoritative, so a broken one aborts the run
//! immediately instead of being aggregated with other diagnostics.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    core::{ContentSource, TranslationTable},
    issues::LintError,
};

/// Localized strings of one auxiliary item in one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemLocalization {
    pub name: String,
    pub description: String,
}

/// Read the localization document of every item into a table of derived keys.
pub fn read_auxiliary_entries(
    config: &Config,
    source: &impl ContentSource,
    items: &[String],
) -> Result<TranslationTable, LintError> {
    let mut table = TranslationTable::new();

    for item in items {
        let path = config.auxiliary_path(item);
        let content = source.fetch(&path)?;
        let localizations: BTreeMap<String, serde_json::Value> = serde_json::from_slice(&content)
            .map_err(|source| LintError::AuxiliaryJson {
                path: path.clone(),
                source,
            })?;

        let name_key = format!("{}_{}_name", config.auxiliary_prefix, item);
        let description_key = format!("{}_{}_description", config.auxiliary_prefix, item);

        // Only the required languages are decoded; other entries may have any shape.
        for language in &config.languages {
            let value =
                localizations
                    .get(language)
                    .ok_or_else(|| LintError::AuxiliaryMissingLanguage {
                        path: path.clone(),
                        language: language.clone(),
                    })?;
            let localization = ItemLocalization::deserialize(value).map_err(|source| {
                LintError::AuxiliaryJson {
                    path: path.clone(),
                    source,
                }
            })?;
            table.insert(&name_key, language, localization.name.as_str());
            table.insert(&description_key, language, localization.description.as_str());
        }
    }

    debug!(items = items.len(), keys = table.len(), "read auxiliary entries");
    Ok(table)
}

/// Merge auxiliary entries into `table`, overwriting values of the same key and language.
pub fn merge_auxiliary_entries(
    table: &mut TranslationTable,
    config: &Config,
    source: &impl ContentSource,
    items: &[String],
) -> Result<(), LintError> {
    let derived = read_auxiliary_entries(config, source, items)?;
    table.extend(derived);
    Ok(())
}
