use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod fix;
mod init;
mod pseudo;

const BIN_NAME: &str = "langsync";

pub const EN_LANG: &str = r#"farewell = "See you soon"
greeting = "Hello, %(name)!"
locale = "en"
quote = "Say \"hi\"\nto all"
"#;

pub const ES_LANG: &str = r#"farewell = "Hasta pronto"
greeting = "Hola, %(name)!"
locale = "es"
quote = "Di \"hola\"\na todos"
"#;

pub const PT_LANG: &str = r#"farewell = "Até logo"
greeting = "Olá, %(name)!"
locale = "pt"
quote = "Diga \"oi\"\npara todos"
"#;

/// Every artifact generated with the default configuration.
pub const ARTIFACT_PATHS: &[&str] = &[
    "frontend/templates/pseudo.lang",
    "frontend/www/js/omegaup/lang.en.json",
    "frontend/www/js/omegaup/lang.en.ts",
    "frontend/www/js/omegaup/lang.es.json",
    "frontend/www/js/omegaup/lang.es.ts",
    "frontend/www/js/omegaup/lang.pt.json",
    "frontend/www/js/omegaup/lang.pt.ts",
    "frontend/www/js/omegaup/lang.pseudo.json",
    "frontend/www/js/omegaup/lang.pseudo.ts",
];

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop configuration lookup at the project directory.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with valid sources in every language and empty artifacts.
    pub fn with_sources() -> Result<Self> {
        let test = Self::new()?;
        test.write_sources(EN_LANG, ES_LANG, PT_LANG)?;
        test.touch_artifacts()?;
        Ok(test)
    }

    pub fn write_sources(&self, en: &str, es: &str, pt: &str) -> Result<()> {
        self.write_file("frontend/templates/en.lang", en)?;
        self.write_file("frontend/templates/es.lang", es)?;
        self.write_file("frontend/templates/pt.lang", pt)?;
        Ok(())
    }

    pub fn touch_artifacts(&self) -> Result<()> {
        for path in ARTIFACT_PATHS {
            self.write_file(path, "")?;
        }
        Ok(())
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    /// Regex matching the project directory, for snapshot filters.
    pub fn root_pattern(&self) -> String {
        regex::escape(&self.project_dir.display().to_string())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn fix_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fix");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
