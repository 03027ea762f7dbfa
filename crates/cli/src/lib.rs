#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `dircat` command: it parses the command line, resolves
//! the scan configuration, walks the directory tree with pruning, and writes
//! the selected files as one Markdown document. The binary crate only wires
//! process streams into [`run`].
//!
//! # Design
//!
//! - Parsing uses a `clap` [`Command`](clap::Command) built with the builder
//!   API. Help and version output are rendered from fixed text so they are
//!   stable across `clap` upgrades.
//! - [`CatConfig`] is the immutable result of validating the operands. It is
//!   passed explicitly into [`collect_files`].
//! - [`collect_files`] and [`emit_document`] form the pipeline. They are
//!   public so tests and embedders can drive each stage separately.
//! - [`CliError`] carries every fatal failure and maps it to an exit code.
//!
//! # Invariants
//!
//! - [`run`] never panics and never writes anything to `stdout` except the
//!   document, help, or version text.
//! - Only argument, directory, empty-pattern, and output failures change the exit
//!   status. Unreadable files and directories below the root are reported on
//!   `stderr` and skipped.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `0`  | Success, including runs that matched no files. |
//! | `1`  | Invalid arguments or an empty pattern list. |
//! | `3`  | Directory missing, not a directory, or unreadable. |
//! | `11` | Writing to standard output failed. |
//!
//! # Examples
//!
//! ```
//! use cli::run;
//! use std::ffi::OsStr;
//! use std::fs;
//!
//! let temp = tempfile::tempdir().unwrap();
//! fs::write(temp.path().join("hello.sh"), "echo hi\n").unwrap();
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = run(
//!     [OsStr::new("dircat"), temp.path().as_os_str(), OsStr::new("*.sh")],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, 0);
//! assert_eq!(
//!     String::from_utf8(stdout).unwrap(),
//!     "### hello.sh\n\n```bash\necho hi\n```\n"
//! );
//! ```

use std::ffi::OsString;
use std::io::Write;

use logging::VerbosityConfig;

mod arguments;
mod collect;
mod config;
mod emit;
mod error;

pub use collect::{Collection, FileRecord, collect_files};
pub use config::{CatConfig, expand_home};
pub use emit::{EmitSummary, emit_document};
pub use error::{CliError, EXIT_FILE_IO, EXIT_FILE_SELECT, EXIT_SYNTAX};

use arguments::{HELP_TEXT, PROGRAM_NAME, ParsedArgs, parse_args, version_banner};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs `dircat` with the supplied arguments and streams.
///
/// `arguments` includes the program name. The returned value is the process
/// exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let result = parse_args(arguments)
        .map_err(CliError::from)
        .and_then(|parsed| execute(&parsed, stdout, stderr));

    match result {
        Ok(()) => 0,
        Err(error) => {
            report_error(&error, stderr);
            error.exit_code()
        }
    }
}

fn execute<Out, Err>(parsed: &ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> Result<(), CliError>
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        stdout.write_all(HELP_TEXT.as_bytes())?;
        return Ok(());
    }
    if parsed.show_version {
        stdout.write_all(version_banner().as_bytes())?;
        return Ok(());
    }

    logging::init_tracing(VerbosityConfig::from_verbose_level(parsed.verbose));

    let config = CatConfig::from_parsed(parsed)?;
    tracing::info!(
        target: "dircat::cli",
        root = %config.root().display(),
        include = ?config.rules().include().patterns(),
        exclude = ?config.rules().exclude().patterns(),
        follow_symlinks = config.follow_symlinks(),
        "starting scan"
    );

    let collection = collect_files(&config)?;
    for warning in &collection.warnings {
        let _ = writeln!(stderr, "Warning: {warning}");
    }

    emit_document(&collection.files, stdout, stderr)?;
    Ok(())
}

fn report_error<Err: Write>(error: &CliError, stderr: &mut Err) {
    let _ = match error {
        // clap renders its own `error:` prefix and usage line.
        CliError::Usage(inner) => writeln!(stderr, "{}", inner.to_string().trim_end()),
        other => writeln!(stderr, "{PROGRAM_NAME}: error: {other}"),
    };
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}
