//! Canonical renderings of the translation table.
//!
//! Every language (plus the pseudolocale) is rendered three ways:
//!
//! - `lang`: the sorted `.lang` source itself
//! - `json`: a tab-indented JSON object for runtime loading
//! - `typescript`: a generated TypeScript module for the front-end build
//!
//! All renderings iterate keys in sorted order and are byte-reproducible.

pub mod json;
pub mod lang;
pub mod typescript;

use std::{fmt, io};

use crate::{
    config::Config,
    core::{PSEUDO_LANGUAGE, TranslationTable},
};

pub use json::render_json;
pub use lang::render_lang;
pub use typescript::render_typescript;

/// One of the generated artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactFormat {
    Lang,
    TypeScript,
    Json,
}

impl ArtifactFormat {
    /// Emission order within a language.
    pub const ALL: [ArtifactFormat; 3] = [
        ArtifactFormat::Lang,
        ArtifactFormat::TypeScript,
        ArtifactFormat::Json,
    ];

    fn path_template(self, config: &Config) -> &str {
        match self {
            ArtifactFormat::Lang => &config.lang_path,
            ArtifactFormat::TypeScript => &config.typescript_path,
            ArtifactFormat::Json => &config.json_path,
        }
    }

    /// Path of this artifact for `language`.
    pub fn path(self, config: &Config, language: &str) -> String {
        self.path_template(config)
            .replace(crate::config::LANG_PLACEHOLDER, language)
    }

    pub fn render(self, table: &TranslationTable, language: &str) -> io::Result<String> {
        match self {
            ArtifactFormat::Lang => Ok(render_lang(table, language)),
            ArtifactFormat::TypeScript => render_typescript(table, language),
            ArtifactFormat::Json => render_json(table, language),
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactFormat::Lang => write!(f, "lang"),
            ArtifactFormat::TypeScript => write!(f, "typescript"),
            ArtifactFormat::Json => write!(f, "json"),
        }
    }
}

/// A freshly rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub language: String,
    pub format: ArtifactFormat,
    pub content: String,
}

/// Languages that get artifacts: the required ones, then the pseudolocale.
pub fn output_languages(config: &Config) -> Vec<&str> {
    config
        .languages
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(PSEUDO_LANGUAGE))
        .collect()
}

/// Render every artifact for every output language.
///
/// Expects a checked table: every key has a value in every output language.
pub fn emit_all(table: &TranslationTable, config: &Config) -> io::Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();
    for language in output_languages(config) {
        for format in ArtifactFormat::ALL {
            artifacts.push(Artifact {
                path: format.path(config, language),
                language: language.to_string(),
                format,
                content: format.render(table, language)?,
            });
        }
    }
    Ok(artifacts)
}

/// Resolve the escapes stored in `.lang` values: `\"` to a quote, then `\n` to a newline.
pub fn unescape(value: &str) -> String {
    value.replace("\\\"", "\"").replace("\\n", "\n")
}

/// Stored value of `key` in `language`; missing values render as empty strings.
fn stored_value<'a>(values: &'a crate::core::LanguageValues, language: &str) -> &'a str {
    values.get(language).map_or("", String::as_str)
}
