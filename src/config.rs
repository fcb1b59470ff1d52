use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::PSEUDO_LANGUAGE;

pub const CONFIG_FILE_NAME: &str = ".langsyncrc.json";

/// Placeholder replaced by a language code in every path template.
pub const LANG_PLACEHOLDER: &str = "{lang}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Required languages, in reporting and emission order.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Language the pseudolocale is derived from.
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_lang_path")]
    pub lang_path: String,
    #[serde(default = "default_json_path")]
    pub json_path: String,
    #[serde(default = "default_typescript_path")]
    pub typescript_path: String,
    /// Directory holding one subdirectory per auxiliary item (e.g. per badge).
    #[serde(default = "default_auxiliary_root")]
    pub auxiliary_root: String,
    #[serde(default = "default_auxiliary_file")]
    pub auxiliary_file: String,
    /// Derived keys are named `<prefix>_<item>_name` and `<prefix>_<item>_description`.
    #[serde(default = "default_auxiliary_prefix")]
    pub auxiliary_prefix: String,
}

fn default_languages() -> Vec<String> {
    ["en", "es", "pt"].map(String::from).to_vec()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_lang_path() -> String {
    "frontend/templates/{lang}.lang".to_string()
}

fn default_json_path() -> String {
    "frontend/www/js/omegaup/lang.{lang}.json".to_string()
}

fn default_typescript_path() -> String {
    "frontend/www/js/omegaup/lang.{lang}.ts".to_string()
}

fn default_auxiliary_root() -> String {
    "frontend/badges".to_string()
}

fn default_auxiliary_file() -> String {
    "localizations.json".to_string()
}

fn default_auxiliary_prefix() -> String {
    "badge".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            default_language: default_language(),
            lang_path: default_lang_path(),
            json_path: default_json_path(),
            typescript_path: default_typescript_path(),
            auxiliary_root: default_auxiliary_root(),
            auxiliary_file: default_auxiliary_file(),
            auxiliary_prefix: default_auxiliary_prefix(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must list at least one language");
        }
        if self.languages.iter().any(|lang| lang == PSEUDO_LANGUAGE) {
            bail!(
                "'languages' must not contain \"{}\": it is generated, not translated",
                PSEUDO_LANGUAGE
            );
        }
        if !self.languages.contains(&self.default_language) {
            bail!(
                "'defaultLanguage' \"{}\" is not one of 'languages'",
                self.default_language
            );
        }

        for (field, template) in [
            ("langPath", &self.lang_path),
            ("jsonPath", &self.json_path),
            ("typescriptPath", &self.typescript_path),
        ] {
            if !template.contains(LANG_PLACEHOLDER) {
                bail!(
                    "Path template '{}' must contain {}: \"{}\"",
                    field,
                    LANG_PLACEHOLDER,
                    template
                );
            }
        }

        if self.auxiliary_prefix.is_empty() {
            bail!("'auxiliaryPrefix' must not be empty");
        }

        Ok(())
    }

    /// Path of the `.lang` source file for `language`.
    pub fn lang_path(&self, language: &str) -> String {
        self.lang_path.replace(LANG_PLACEHOLDER, language)
    }

    /// Prefix shared by every auxiliary-derived key, including the trailing underscore.
    pub fn auxiliary_key_prefix(&self) -> String {
        format!("{}_", self.auxiliary_prefix)
    }

    /// Path of the localization document of one auxiliary item.
    pub fn auxiliary_path(&self, item: &str) -> String {
        format!("{}/{}/{}", self.auxiliary_root, item, self.auxiliary_file)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory every configured path is relative to: the config file's
    /// directory, or the start directory when using defaults.
    pub root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root: start_dir.to_path_buf(),
        }),
    }
}
