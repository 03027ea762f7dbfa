//! Resolved run configuration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use filters::{MatchRules, parse_pattern_list};

use crate::arguments::ParsedArgs;
use crate::error::CliError;

/// Immutable inputs for one `dircat` run.
#[derive(Clone, Debug)]
pub struct CatConfig {
    root: PathBuf,
    rules: MatchRules,
    follow_symlinks: bool,
}

impl CatConfig {
    /// Creates a configuration from already validated parts.
    #[must_use]
    pub const fn new(root: PathBuf, rules: MatchRules, follow_symlinks: bool) -> Self {
        Self {
            root,
            rules,
            follow_symlinks,
        }
    }

    /// Validates parsed operands.
    ///
    /// The directory is checked before the patterns, so a bad directory is
    /// reported even when the pattern list is also empty.
    pub(crate) fn from_parsed(parsed: &ParsedArgs) -> Result<Self, CliError> {
        let directory = parsed.directory.as_deref().unwrap_or_default();
        let root = expand_home(directory);
        if !root.is_dir() {
            return Err(CliError::InvalidDirectory { path: root });
        }

        let include = parse_pattern_list(
            &parsed
                .patterns
                .as_deref()
                .unwrap_or_default()
                .to_string_lossy(),
        );
        if include.is_empty() {
            return Err(CliError::NoPatterns);
        }
        let exclude = parsed
            .excludes
            .iter()
            .map(|pattern| pattern.to_string_lossy().into_owned());
        let rules = MatchRules::new(include, exclude)?;

        Ok(Self::new(root, rules, parsed.follow_symlinks))
    }

    /// Directory being scanned, after home expansion.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compiled include and exclude rules.
    #[must_use]
    pub const fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Whether symlinked directories are descended and symlinked files read.
    #[must_use]
    pub const fn follow_symlinks(&self) -> bool {
        self.follow_symlinks
    }
}

/// Expands a leading `~` or `~/` to the current user's home directory.
///
/// Other forms, including `~user`, are returned unchanged, as is everything
/// when the home directory cannot be determined.
#[must_use]
pub fn expand_home(path: &OsStr) -> PathBuf {
    expand_home_with(path, dirs::home_dir().as_deref())
}

fn expand_home_with(path: &OsStr, home: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    match (home, path.strip_prefix("~")) {
        (Some(home), Ok(rest)) if rest.as_os_str().is_empty() => home.to_path_buf(),
        (Some(home), Ok(rest)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
