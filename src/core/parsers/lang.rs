//! Parser for `.lang` translation sources.
//!
//! Each line has the form `key = "value"`. Inside the quotes, `\"` is the
//! only escape the parser understands; it is unescaped on load. Any other
//! backslash sequence (notably `\n`) is stored verbatim and only resolved by
//! the JSON and TypeScript emitters.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{
    config::Config,
    core::{ContentSource, Diagnostic, TranslationTable},
    issues::LintError,
};

static SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+=\s+").unwrap());
static QUOTED_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"((?:[^"]|\\")*)"$"#).unwrap());

/// Parse one trimmed line into its key and stored value.
fn parse_line(line: &str) -> Option<(&str, String)> {
    let mut parts = SEPARATOR_REGEX.splitn(line, 2);
    let key = parts.next()?;
    let value = parts.next()?;
    let captures = QUOTED_VALUE_REGEX.captures(value)?;
    Some((key, captures[1].replace(r#"\""#, "\"")))
}

/// Parse the content of one `.lang` file into `table`.
///
/// Every malformed line is recorded in `diagnostics` and skipped; parsing
/// carries on with the next line. The content must end with a newline: a
/// trailing unterminated line is reported and ignored.
pub fn parse_lang_file(
    file_path: &str,
    language: &str,
    content: &[u8],
    table: &mut TranslationTable,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut lines: Vec<&[u8]> = content.split(|byte| *byte == b'\n').collect();
    let unterminated = lines.pop().filter(|last| !last.is_empty());

    for (index, raw_line) in lines.iter().enumerate() {
        let lineno = index + 1;
        let line = match std::str::from_utf8(raw_line) {
            Ok(line) => line.trim(),
            Err(_) => {
                let lossy = String::from_utf8_lossy(raw_line);
                diagnostics.push(
                    Diagnostic::new("Line is not valid UTF-8", file_path)
                        .with_line(lineno)
                        .with_source_line(lossy.trim()),
                );
                continue;
            }
        };

        match parse_line(line) {
            Some((key, value)) => {
                let previous = table.entry_mut(key).insert(language.to_string(), value);
                if previous.is_some() {
                    debug!(file = file_path, line = lineno, key, "duplicate key, keeping last value");
                }
            }
            None => diagnostics.push(
                Diagnostic::new(format!("Invalid line '{}'", line), file_path)
                    .with_line(lineno)
                    .with_source_line(line),
            ),
        }
    }

    if let Some(last) = unterminated {
        let lossy = String::from_utf8_lossy(last);
        diagnostics.push(
            Diagnostic::new("Missing newline at end of file", file_path)
                .with_line(lines.len() + 1)
                .with_source_line(lossy.trim()),
        );
    }
}

/// Parse the `.lang` file of every configured language.
///
/// Fails with [`LintError::InvalidSources`] carrying every diagnostic when any
/// line is malformed. Keys with the auxiliary prefix are dropped from the
/// result: those entries are owned by the auxiliary merge.
pub fn parse_sources(
    config: &Config,
    source: &impl ContentSource,
) -> Result<TranslationTable, LintError> {
    let mut table = TranslationTable::new();
    let mut diagnostics = Vec::new();

    for language in &config.languages {
        let file_path = config.lang_path(language);
        let content = source.fetch(&file_path)?;
        parse_lang_file(&file_path, language, &content, &mut table, &mut diagnostics);
        debug!(file = %file_path, keys = table.len(), "parsed translation source");
    }

    if !diagnostics.is_empty() {
        return Err(LintError::InvalidSources { diagnostics });
    }

    let prefix = config.auxiliary_key_prefix();
    table.retain_keys(|key| !key.starts_with(&prefix));
    Ok(table)
}
