#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` centralises diagnostic output for the `dircat` workspace. Every
//! crate emits [`tracing`] events under a subsystem-specific target
//! (`dircat::walk`, `dircat::filter`, `dircat::render`, `dircat::cli`) and the
//! binary installs a single subscriber that routes those events to standard
//! error. Standard output is reserved for the generated Markdown document, so
//! no log line can ever interleave with file contents.
//!
//! # Design
//!
//! - [`Subsystem`] enumerates the tracing targets used across the workspace.
//! - [`VerbosityConfig`] maps the repeatable `-v` flag onto per-subsystem
//!   [`LevelFilter`](tracing::level_filters::LevelFilter) values and renders
//!   them as [`EnvFilter`](tracing_subscriber::EnvFilter) directives.
//! - [`init_tracing`] installs the subscriber. Installation is idempotent so
//!   repeated CLI invocations inside one process (as in tests) are harmless.
//! - The `trace_*!` macros wrap the standard tracing macros with the correct
//!   target for each subsystem.
//!
//! # Invariants
//!
//! - Log output never reaches standard output.
//! - `RUST_LOG`, when set and valid, overrides the `-v` mapping.
//!
//! # Examples
//!
//! ```
//! use logging::{Subsystem, VerbosityConfig};
//! use tracing::level_filters::LevelFilter;
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.level(Subsystem::Walk), LevelFilter::DEBUG);
//! assert!(config.directives().contains("dircat::filter=debug"));
//! ```

mod config;
mod levels;
mod subscriber;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::Subsystem;
pub use subscriber::{init_tracing, init_tracing_with_writer};
