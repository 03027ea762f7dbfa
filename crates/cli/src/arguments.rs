//! Command-line surface.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};

/// Program name used in help, usage, and diagnostics.
pub(crate) const PROGRAM_NAME: &str = "dircat";

/// Deterministic help text describing the CLI surface.
pub(crate) const HELP_TEXT: &str = concat!(
    "dircat ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Concatenate files matching glob patterns into a single Markdown document.\n",
    "\n",
    "Usage: dircat [OPTIONS] <DIRECTORY> <PATTERNS>\n",
    "\n",
    "Arguments:\n",
    "  <DIRECTORY>  Directory to scan; a leading '~' expands to the home directory.\n",
    "  <PATTERNS>   Comma-separated include globs matched against file names,\n",
    "               e.g. \"*.py,*.md\".\n",
    "\n",
    "Options:\n",
    "      --exclude <PATTERN>  Skip files and prune directories matching PATTERN\n",
    "                           by name or relative path. May be repeated.\n",
    "      --follow-symlinks    Descend into symlinked directories and read\n",
    "                           symlinked files.\n",
    "  -v, --verbose            Increase diagnostic logging on stderr. May be repeated.\n",
    "  -h, --help               Show this help message and exit.\n",
    "  -V, --version            Output version information and exit.\n",
    "\n",
    "Directories whose name starts with '.' are never scanned.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) verbose: u8,
    pub(crate) follow_symlinks: bool,
    pub(crate) directory: Option<OsString>,
    pub(crate) patterns: Option<OsString>,
    pub(crate) excludes: Vec<OsString>,
}

/// Builds the `clap` command used for parsing.
///
/// Operands are optional at the `clap` level so `--help` and `--version`
/// work on their own; [`parse_args`] enforces them otherwise.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .override_usage("dircat [OPTIONS] <DIRECTORY> <PATTERNS>")
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic logging on stderr.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("follow-symlinks")
                .long("follow-symlinks")
                .help("Descend into symlinked directories and read symlinked files.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("PATTERN")
                .help("Skip files and prune directories matching PATTERN.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .help("Directory to scan.")
                .value_parser(OsStringValueParser::new())
                .index(1),
        )
        .arg(
            Arg::new("patterns")
                .value_name("PATTERNS")
                .help("Comma-separated include globs.")
                .value_parser(OsStringValueParser::new())
                .index(2),
        )
}

/// Parses `arguments` (including the program name) into [`ParsedArgs`].
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut command = clap_command();
    let mut matches = command.try_get_matches_from_mut(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let verbose = matches.get_count("verbose");
    let follow_symlinks = matches.get_flag("follow-symlinks");
    let directory = matches.remove_one::<OsString>("directory");
    let patterns = matches.remove_one::<OsString>("patterns");
    let excludes = matches
        .remove_many::<OsString>("exclude")
        .map(|values| values.collect())
        .unwrap_or_default();

    if !show_help && !show_version {
        if directory.is_none() {
            return Err(command.error(
                ErrorKind::MissingRequiredArgument,
                "missing DIRECTORY operand",
            ));
        }
        if patterns.is_none() {
            return Err(command.error(
                ErrorKind::MissingRequiredArgument,
                "missing PATTERNS operand",
            ));
        }
    }

    Ok(ParsedArgs {
        show_help,
        show_version,
        verbose,
        follow_symlinks,
        directory,
        patterns,
        excludes,
    })
}

/// Returns the version banner printed by `--version`.
pub(crate) fn version_banner() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ParsedArgs, clap::Error> {
        parse_args(args.iter().copied())
    }

    #[test]
    fn parses_operands_and_repeated_excludes() {
        let parsed = parse(&[
            "dircat",
            "src",
            "*.rs,*.toml",
            "--exclude",
            "target",
            "--exclude=*.lock",
        ])
        .expect("parse");

        assert_eq!(parsed.directory, Some(OsString::from("src")));
        assert_eq!(parsed.patterns, Some(OsString::from("*.rs,*.toml")));
        assert_eq!(
            parsed.excludes,
            [OsString::from("target"), OsString::from("*.lock")]
        );
        assert!(!parsed.follow_symlinks);
        assert_eq!(parsed.verbose, 0);
    }

    #[test]
    fn options_may_precede_operands() {
        let parsed = parse(&["dircat", "--exclude", "dist", "-vv", "--follow-symlinks", ".", "*.js"])
            .expect("parse");

        assert_eq!(parsed.directory, Some(OsString::from(".")));
        assert_eq!(parsed.excludes, [OsString::from("dist")]);
        assert_eq!(parsed.verbose, 2);
        assert!(parsed.follow_symlinks);
    }

    #[test]
    fn help_and_version_do_not_require_operands() {
        assert!(parse(&["dircat", "--help"]).expect("help").show_help);
        assert!(parse(&["dircat", "-V"]).expect("version").show_version);
    }

    #[test]
    fn missing_operands_are_usage_errors() {
        let error = parse(&["dircat"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        let error = parse(&["dircat", "."]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        assert!(error.to_string().contains("PATTERNS"));
    }

    #[test]
    fn exclude_requires_a_value() {
        let error = parse(&["dircat", ".", "*.py", "--exclude"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn unknown_flags_and_extra_operands_are_rejected() {
        let error = parse(&["dircat", ".", "*.py", "--bogus"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);

        let error = parse(&["dircat", ".", "*.py", "extra"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn empty_argument_list_uses_program_name() {
        let error = parse_args(Vec::<OsString>::new()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn help_text_lists_every_option() {
        for option in ["--exclude", "--follow-symlinks", "--verbose", "--help", "--version"] {
            assert!(HELP_TEXT.contains(option), "{option}");
        }
        assert!(version_banner().starts_with("dircat "));
    }
}
