use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::walker::{DirectoryFilter, Walker};
use std::fmt;
use std::path::PathBuf;

/// Configures a filesystem traversal rooted at a specific path.
pub struct WalkBuilder {
    root: PathBuf,
    follow_symlinks: bool,
    include_root: bool,
    filter: Option<DirectoryFilter>,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
            include_root: true,
            filter: None,
        }
    }

    /// Configures whether directory symlinks should be traversed.
    ///
    /// The walker always yields the symlink entry itself. When this option is
    /// enabled and the symlink points to a directory, the walker also descends
    /// into the target directory while keeping the symlink's relative path in
    /// emitted [`WalkEntry`] values. A symlinked root is resolved either way.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Controls whether the root entry should be included in the output.
    ///
    /// When disabled, traversal starts directly with the root's children.
    #[must_use]
    pub const fn include_root(mut self, include: bool) -> Self {
        self.include_root = include;
        self
    }

    /// Installs a predicate deciding whether a directory is entered.
    ///
    /// The predicate receives the directory entry before its contents are read.
    /// Returning `false` prunes the directory: it is not yielded and nothing
    /// beneath it is visited.
    #[must_use]
    pub fn filter_directory<F>(mut self, filter: F) -> Self
    where
        F: FnMut(&WalkEntry) -> bool + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Builds a [`Walker`] using the configured options.
    pub fn build(self) -> Result<Walker, WalkError> {
        Walker::new(
            self.root,
            self.follow_symlinks,
            self.include_root,
            self.filter,
        )
    }
}

impl fmt::Debug for WalkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkBuilder")
            .field("root", &self.root)
            .field("follow_symlinks", &self.follow_symlinks)
            .field("include_root", &self.include_root)
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}
