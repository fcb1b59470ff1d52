//! Missing entries detection rule.
//!
//! Reports every key that lacks a value in one of the required languages.
//! Keys that are complete get their pseudolocale value as a side effect, so
//! after a successful check every key is present in every emitted language.

use tracing::debug;

use crate::{
    config::Config,
    core::{Diagnostic, PSEUDO_LANGUAGE, TranslationTable, pseudolocalize},
    issues::LintError,
};

/// Key whose pseudolocale value names the locale itself instead of being transformed.
pub const LOCALE_KEY: &str = "locale";

/// Check language coverage of every key and fill in the pseudolocale.
///
/// Diagnostics point at the `.lang` file of the missing language and are
/// ordered by key, then by the configured language order. Incomplete keys
/// never receive a pseudolocale value.
pub fn check_missing_entries(
    table: &mut TranslationTable,
    config: &Config,
) -> Result<(), LintError> {
    let mut diagnostics = Vec::new();

    for (key, values) in table.iter_mut() {
        let missing: Vec<&String> = config
            .languages
            .iter()
            .filter(|language| !values.contains_key(language.as_str()))
            .collect();

        if !missing.is_empty() {
            diagnostics.extend(missing.into_iter().map(|language| {
                Diagnostic::new(
                    format!("Missing entry: \"{}\"", key),
                    config.lang_path(language),
                )
            }));
            continue;
        }

        let pseudo = if key == LOCALE_KEY {
            PSEUDO_LANGUAGE.to_string()
        } else {
            // The default language is one of the required languages, so it is present.
            values
                .get(&config.default_language)
                .map(|value| pseudolocalize(value))
                .unwrap_or_default()
        };
        values.insert(PSEUDO_LANGUAGE.to_string(), pseudo);
    }

    if !diagnostics.is_empty() {
        debug!(count = diagnostics.len(), "missing entries found");
        return Err(LintError::MissingEntries { diagnostics });
    }
    Ok(())
}
