//! Fatal errors surfaced by the command-line front end.

use std::io;
use std::path::PathBuf;

use filters::FilterError;
use thiserror::Error;
use walk::WalkError;

/// Exit code for syntax or usage errors.
pub const EXIT_SYNTAX: i32 = 1;
/// Exit code for a directory operand that cannot be scanned.
pub const EXIT_FILE_SELECT: i32 = 3;
/// Exit code for failures writing the document.
pub const EXIT_FILE_IO: i32 = 11;

/// Error that stops `dircat` before or while producing output.
///
/// Per-file read failures are not represented here: they are reported as
/// diagnostics and never abort the run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(#[from] clap::Error),
    /// The directory operand does not name an existing directory.
    #[error("'{}' is not a valid directory", path.display())]
    InvalidDirectory {
        /// Directory after home expansion.
        path: PathBuf,
    },
    /// The pattern operand contained no pattern after trimming.
    #[error("no patterns specified")]
    NoPatterns,
    /// The compiled pattern set could not be built.
    ///
    /// Every shell wildcard compiles, so this only surfaces matcher limits.
    #[error(transparent)]
    InvalidPattern(FilterError),
    /// The scan root could not be read.
    #[error("cannot scan directory: {0}")]
    Traversal(#[from] WalkError),
    /// Writing the document to standard output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Returns the process exit code associated with the error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::NoPatterns | Self::InvalidPattern(_) => EXIT_SYNTAX,
            Self::InvalidDirectory { .. } | Self::Traversal(_) => EXIT_FILE_SELECT,
            Self::Output(_) => EXIT_FILE_IO,
        }
    }
}

impl From<FilterError> for CliError {
    fn from(error: FilterError) -> Self {
        match error {
            FilterError::NoIncludePatterns => Self::NoPatterns,
            other @ FilterError::InvalidPattern { .. } => Self::InvalidPattern(other),
        }
    }
}
