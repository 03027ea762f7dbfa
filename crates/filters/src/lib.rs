#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which directories `dircat` descends into and which files
//! it selects. Users supply a list of include globs and a list of exclude
//! globs; this crate compiles both and answers two questions during traversal:
//! should a directory be entered, and should a file be emitted.
//!
//! # Design
//!
//! - [`PatternList`] wraps a compiled [`globset::GlobSet`] together with the
//!   source text of each pattern. [`parse_pattern_list`] splits the
//!   comma-separated command-line form into individual patterns.
//! - [`MatchRules`] pairs the include and exclude lists and exposes
//!   [`MatchRules::directory_decision`] and [`MatchRules::file_decision`].
//! - [`DirectoryDecision`] and [`FileDecision`] record why an entry was kept
//!   or rejected so callers can log the reason.
//!
//! Matching operates on `/`-separated relative paths regardless of host
//! platform.
//!
//! # Invariants
//!
//! - Glob semantics follow shell `fnmatch`: `*` and `?` also match `/` and
//!   bracket classes such as `[abc]` and `[!a-z]` are honoured. Braces and
//!   backslashes are ordinary characters and an unclosed `[` matches itself,
//!   so no shell wildcard is rejected.
//! - Matching is case-sensitive on every platform.
//! - Directories whose name starts with `.` are always pruned. Hidden files
//!   are not treated specially.
//! - Include patterns are tested against the bare file name only. Exclude
//!   patterns are tested against both the bare name and the relative path.
//!
//! # Errors
//!
//! [`MatchRules::new`] rejects an empty include list. Patterns themselves are
//! never rejected; [`FilterError::InvalidPattern`] only reports a matcher that
//! `globset` cannot build.
//!
//! # Examples
//!
//! ```
//! use filters::{parse_pattern_list, DirectoryDecision, FileDecision, MatchRules};
//!
//! let include = parse_pattern_list("*.rs, *.toml");
//! let rules = MatchRules::new(include, ["target", "*_test.rs"]).expect("rules compile");
//!
//! assert_eq!(rules.directory_decision("src", "src"), DirectoryDecision::Descend);
//! assert_eq!(rules.directory_decision(".git", ".git"), DirectoryDecision::Hidden);
//! assert_eq!(
//!     rules.directory_decision("target", "target"),
//!     DirectoryDecision::ExcludedByName
//! );
//!
//! assert_eq!(rules.file_decision("main.rs", "src/main.rs"), FileDecision::Selected);
//! assert_eq!(rules.file_decision("README.md", "README.md"), FileDecision::NotIncluded);
//! assert_eq!(
//!     rules.file_decision("io_test.rs", "src/io_test.rs"),
//!     FileDecision::ExcludedByName
//! );
//! ```

mod decision;
mod error;
mod pattern;
mod rules;
mod wildcard;

pub use decision::{DirectoryDecision, FileDecision};
pub use error::FilterError;
pub use pattern::{PatternList, parse_pattern_list};
pub use rules::MatchRules;
