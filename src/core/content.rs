//! Content access for the pipeline.
//!
//! Every file the pipeline reads goes through a [`ContentSource`], so the
//! whole run can be exercised against an in-memory closure in tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Maps a project-relative path to the file's current bytes.
///
/// Fails when the path does not exist. Callers propagate the failure.
pub trait ContentSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>>;
}

impl<F> ContentSource for F
where
    F: Fn(&str) -> Result<Vec<u8>>,
{
    fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        self(path)
    }
}

/// Reads files relative to a project root on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for FsSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.root.join(path);
        fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {}", full_path.display()))
    }
}

/// Names of the direct subdirectories of `dir`, sorted.
///
/// Each subdirectory is one auxiliary item. A missing `dir` means there are
/// no items.
pub fn list_item_dirs(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if entry.file_type().is_dir() {
            items.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    items.sort();
    Ok(items)
}
