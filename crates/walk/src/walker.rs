use crate::entry::WalkEntry;
use crate::error::WalkError;
use logging::trace_walk;
use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Predicate deciding whether the walker descends into a directory.
pub(crate) type DirectoryFilter = Box<dyn FnMut(&WalkEntry) -> bool>;

/// Depth-first iterator over filesystem entries.
///
/// Directory contents are read lazily when the directory is reached. Failures
/// below the root are yielded and traversal continues with the next entry.
pub struct Walker {
    root: PathBuf,
    follow_symlinks: bool,
    yielded_root: bool,
    root_metadata: Option<fs::Metadata>,
    stack: Vec<DirectoryState>,
    visited: HashSet<PathBuf>,
    deferred: Option<WalkError>,
    filter: Option<DirectoryFilter>,
}

impl Walker {
    pub(crate) fn new(
        root: PathBuf,
        follow_symlinks: bool,
        include_root: bool,
        filter: Option<DirectoryFilter>,
    ) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        tracing::info!(target: "dircat::walk", root = %root.display(), "scanning directory tree");

        let metadata = fs::symlink_metadata(&root)
            .map_err(|error| WalkError::root_metadata(root.clone(), error))?;

        let descend = if metadata.is_dir() {
            true
        } else if metadata.file_type().is_symlink() {
            // A symlinked root names its target explicitly and is always resolved.
            fs::metadata(&root)
                .map_err(|error| WalkError::root_metadata(root.clone(), error))?
                .is_dir()
        } else {
            false
        };

        let mut walker = Self {
            root,
            follow_symlinks,
            yielded_root: !include_root,
            root_metadata: Some(metadata),
            stack: Vec::new(),
            visited: HashSet::new(),
            deferred: None,
            filter,
        };

        if descend {
            walker.push_directory(walker.root.clone(), PathBuf::new())?;
        }

        Ok(walker)
    }

    fn push_directory(
        &mut self,
        fs_path: PathBuf,
        relative_prefix: PathBuf,
    ) -> Result<(), WalkError> {
        let canonical = fs::canonicalize(&fs_path)
            .map_err(|error| WalkError::canonicalize(fs_path.clone(), error))?;
        if !self.visited.insert(canonical) {
            trace_walk!(path = %fs_path.display(), "skipping already visited directory");
            return Ok(());
        }

        let state = DirectoryState::new(fs_path, relative_prefix)?;
        self.stack.push(state);
        Ok(())
    }

    /// Builds the entry for `full_path` and schedules its descent.
    ///
    /// Returns `Ok(None)` when the directory filter prunes the entry.
    fn prepare_entry(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
    ) -> Result<Option<WalkEntry>, WalkError> {
        let metadata = fs::symlink_metadata(&full_path)
            .map_err(|error| WalkError::metadata(full_path.clone(), error))?;

        let mut target_metadata = None;
        let mut descend_into = None;
        if metadata.is_dir() {
            descend_into = Some(full_path.clone());
        } else if metadata.file_type().is_symlink() && self.follow_symlinks {
            let target = fs::metadata(&full_path)
                .map_err(|error| WalkError::metadata(full_path.clone(), error))?;
            if target.is_dir() {
                let canonical = fs::canonicalize(&full_path)
                    .map_err(|error| WalkError::canonicalize(full_path.clone(), error))?;
                descend_into = Some(canonical);
            }
            target_metadata = Some(target);
        }

        let entry = WalkEntry {
            full_path,
            relative_path,
            metadata,
            target_metadata,
            is_root: false,
        };

        if let Some(dir_path) = descend_into {
            if !self.allows_descent(&entry) {
                trace_walk!(path = %entry.relative_slash_path(), "pruned directory");
                return Ok(None);
            }
            // The directory itself is still yielded; its read failure follows it.
            if let Err(error) = self.push_directory(dir_path, entry.relative_path.clone()) {
                self.deferred = Some(error);
            }
        }

        Ok(Some(entry))
    }

    fn allows_descent(&mut self, entry: &WalkEntry) -> bool {
        self.filter.as_mut().is_none_or(|filter| filter(entry))
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.yielded_root {
            self.yielded_root = true;
            if let Some(metadata) = self.root_metadata.take() {
                let entry = WalkEntry {
                    full_path: self.root.clone(),
                    relative_path: PathBuf::new(),
                    metadata,
                    target_metadata: None,
                    is_root: true,
                };
                return Some(Ok(entry));
            }
        }

        if let Some(error) = self.deferred.take() {
            return Some(Err(error));
        }

        loop {
            let state = self.stack.last_mut()?;
            let Some(name) = state.next_name() else {
                self.stack.pop();
                continue;
            };

            let full_path = state.fs_path.join(&name);
            let relative_path = state.relative_prefix.join(&name);

            match self.prepare_entry(full_path, relative_path) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => continue,
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

impl fmt::Debug for Walker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("root", &self.root)
            .field("follow_symlinks", &self.follow_symlinks)
            .field("pending_directories", &self.stack.len())
            .field("visited", &self.visited.len())
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: std::vec::IntoIter<OsString>,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, relative_prefix: PathBuf) -> Result<Self, WalkError> {
        let mut entries = Vec::new();
        let read_dir =
            fs::read_dir(&fs_path).map_err(|error| WalkError::read_dir(fs_path.clone(), error))?;
        for entry in read_dir {
            let entry = entry.map_err(|error| WalkError::read_dir_entry(fs_path.clone(), error))?;
            entries.push(entry.file_name());
        }
        entries.sort();

        trace_walk!(path = %fs_path.display(), entries = entries.len(), "read directory");

        Ok(Self {
            fs_path,
            relative_prefix,
            entries: entries.into_iter(),
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        self.entries.next()
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir()
            .map_err(|error| WalkError::canonicalize(PathBuf::from("."), error))?;
        Ok(cwd.join(path))
    }
}
