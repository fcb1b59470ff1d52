//! Drift detection between generated artifacts and the files on disk.
//!
//! Drift is advisory: it is returned as a [`DriftReport`] for the caller to
//! display or apply, never raised as an error.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use tracing::warn;

use crate::core::{ContentSource, emit::Artifact};

/// Label identifying this checker in reports.
pub const DRIFT_LABEL: &str = "i18n";

/// Artifacts whose generated content differs from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    /// Path -> freshly generated bytes.
    pub new_contents: BTreeMap<String, Vec<u8>>,
    /// Path -> bytes currently on disk.
    pub original_contents: BTreeMap<String, Vec<u8>>,
    pub label: &'static str,
}

impl DriftReport {
    pub fn new() -> Self {
        Self {
            new_contents: BTreeMap::new(),
            original_contents: BTreeMap::new(),
            label: DRIFT_LABEL,
        }
    }

    /// True when every artifact matches disk.
    pub fn is_clean(&self) -> bool {
        self.new_contents.is_empty()
    }

    /// Drifted paths, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.new_contents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.new_contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new_contents.is_empty()
    }

    /// Write every new content under `root`, creating parent directories as needed.
    pub fn apply(&self, root: &Path) -> Result<()> {
        for (path, content) in &self.new_contents {
            let file_path = root.join(path);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(&file_path, content)
                .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        }
        Ok(())
    }
}

/// Compare each artifact with the bytes `source` returns for its path.
///
/// A fetch failure (for example, an artifact that does not exist yet) is
/// propagated.
pub fn detect_drift(artifacts: &[Artifact], source: &impl ContentSource) -> Result<DriftReport> {
    let mut report = DriftReport::new();

    for artifact in artifacts {
        let original = source.fetch(&artifact.path)?;
        let generated = artifact.content.as_bytes();
        if original != generated {
            warn!(path = %artifact.path, "entries do not match the translation sources");
            report
                .new_contents
                .insert(artifact.path.clone(), generated.to_vec());
            report
                .original_contents
                .insert(artifact.path.clone(), original);
        }
    }

    Ok(report)
}
