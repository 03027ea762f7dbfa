use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Result of a filesystem traversal step.
#[derive(Debug)]
pub struct WalkEntry {
    pub(crate) full_path: PathBuf,
    pub(crate) relative_path: PathBuf,
    pub(crate) metadata: fs::Metadata,
    pub(crate) target_metadata: Option<fs::Metadata>,
    pub(crate) is_root: bool,
}

impl WalkEntry {
    /// Returns the absolute path to the filesystem entry.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the relative path joined with `/`, whatever the host separator.
    ///
    /// Non-UTF-8 components are converted lossily. The root entry yields an
    /// empty string.
    #[must_use]
    pub fn relative_slash_path(&self) -> String {
        let mut joined = String::new();
        for component in self.relative_path.components() {
            if let Component::Normal(part) = component {
                if !joined.is_empty() {
                    joined.push('/');
                }
                joined.push_str(&part.to_string_lossy());
            }
        }
        joined
    }

    /// Returns the file name associated with the entry, if any.
    ///
    /// The root entry of a traversal yields `None`.
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        if self.is_root {
            None
        } else {
            self.relative_path.file_name()
        }
    }

    /// Returns the file name as text, or an empty string for the root.
    #[must_use]
    pub fn file_name_lossy(&self) -> Cow<'_, str> {
        self.file_name()
            .map_or(Cow::Borrowed(""), OsStr::to_string_lossy)
    }

    /// Reports whether the entry is a regular file.
    ///
    /// Symlinks count only when symlink following is enabled and the target
    /// is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.effective_metadata().is_file()
    }

    pub(crate) fn effective_metadata(&self) -> &fs::Metadata {
        self.target_metadata.as_ref().unwrap_or(&self.metadata)
    }
}
