use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error returned when a traversal step fails.
///
/// Failures on the root are returned from [`crate::WalkBuilder::build`]; all
/// others are yielded by the iterator without stopping it.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) const fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) const fn root_metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::RootMetadata { path, source })
    }

    pub(crate) const fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    pub(crate) const fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) const fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Metadata { path, source })
    }

    pub(crate) const fn canonicalize(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Canonicalize { path, source })
    }

    /// Returns the specific failure.
    #[must_use]
    pub const fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Returns the underlying operating-system error.
    #[must_use]
    pub const fn io_error(&self) -> &io::Error {
        self.kind.io_error()
    }
}

/// Classification of traversal failures.
#[derive(Debug, Error)]
pub enum WalkErrorKind {
    /// Failed to query metadata for the traversal root.
    #[error("failed to inspect traversal root '{}': {source}", path.display())]
    RootMetadata {
        /// Path that failed to provide metadata.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to read the contents of a directory.
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to obtain a directory entry during iteration.
    #[error("failed to read entry in '{}': {source}", path.display())]
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to retrieve metadata for an entry.
    #[error("failed to inspect metadata for '{}': {source}", path.display())]
    Metadata {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to canonicalize a directory path while preventing cycles.
    #[error("failed to canonicalize '{}': {source}", path.display())]
    Canonicalize {
        /// Directory path that failed to canonicalize.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootMetadata { path, .. }
            | Self::ReadDir { path, .. }
            | Self::ReadDirEntry { path, .. }
            | Self::Metadata { path, .. }
            | Self::Canonicalize { path, .. } => path,
        }
    }

    const fn io_error(&self) -> &io::Error {
        match self {
            Self::RootMetadata { source, .. }
            | Self::ReadDir { source, .. }
            | Self::ReadDirEntry { source, .. }
            | Self::Metadata { source, .. }
            | Self::Canonicalize { source, .. } => source,
        }
    }
}
