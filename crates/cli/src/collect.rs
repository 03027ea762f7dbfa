//! File discovery: walk, prune, select, sort.

use std::path::{Path, PathBuf};

use walk::{WalkBuilder, WalkError};

use crate::config::CatConfig;
use crate::error::CliError;

/// A file selected for output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileRecord {
    full_path: PathBuf,
    relative: String,
}

impl FileRecord {
    /// Creates a record from the file's location and its `/`-separated path
    /// relative to the scan root.
    #[must_use]
    pub const fn new(full_path: PathBuf, relative: String) -> Self {
        Self {
            full_path,
            relative,
        }
    }

    /// Location used to read the file.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Path relative to the scan root, `/`-separated.
    #[must_use]
    pub fn relative(&self) -> &str {
        &self.relative
    }
}

/// Outcome of scanning the tree.
#[derive(Debug, Default)]
pub struct Collection {
    /// Selected files in ascending order of relative path.
    pub files: Vec<FileRecord>,
    /// Failures below the root that were skipped.
    pub warnings: Vec<WalkError>,
}

/// Walks `config.root()` and returns the selected files in output order.
///
/// Directories are pruned as they are reached, so nothing below a pruned
/// directory is read. Failures below the root are collected as warnings.
///
/// # Errors
///
/// Returns [`CliError::Traversal`] when the root itself cannot be read.
pub fn collect_files(config: &CatConfig) -> Result<Collection, CliError> {
    let rules = config.rules().clone();
    let walker = WalkBuilder::new(config.root())
        .include_root(false)
        .follow_symlinks(config.follow_symlinks())
        .filter_directory(move |entry| {
            rules
                .directory_decision(&entry.file_name_lossy(), &entry.relative_slash_path())
                .descends()
        })
        .build()?;

    let mut collection = Collection::default();
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(error) => {
                tracing::debug!(target: "dircat::walk", %error, "skipping unreadable entry");
                collection.warnings.push(error);
                continue;
            }
        };
        if !entry.is_file() {
            continue;
        }

        let relative = entry.relative_slash_path();
        if config
            .rules()
            .file_decision(&entry.file_name_lossy(), &relative)
            .is_selected()
        {
            collection
                .files
                .push(FileRecord::new(entry.full_path().to_path_buf(), relative));
        }
    }

    collection
        .files
        .sort_by(|left, right| left.relative.cmp(&right.relative));

    tracing::info!(
        target: "dircat::cli",
        files = collection.files.len(),
        warnings = collection.warnings.len(),
        "collected files"
    );
    Ok(collection)
}
