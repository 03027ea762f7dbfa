#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal that `dircat` uses to
//! discover candidate files. The walker enumerates regular files, directories,
//! and symbolic links beneath a root while keeping ordering stable across
//! platforms: every directory's entries are sorted by name before they are
//! yielded.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options: whether the root entry is
//!   emitted, whether directory symlinks are followed, and an optional
//!   directory filter consulted before descending.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values in
//!   depth-first order.
//! - [`WalkError`] describes I/O failures encountered while querying metadata
//!   or reading directories. Errors capture the offending path.
//!
//! # Pruning
//!
//! The directory filter installed with [`WalkBuilder::filter_directory`] is
//! evaluated once per directory, before any of its contents are read. A
//! directory rejected by the filter is neither yielded nor descended into, so
//! none of its descendants are ever visited. The root is never filtered.
//!
//! # Invariants
//!
//! - Returned [`WalkEntry`] values always reference paths that reside within the
//!   configured root. Relative paths never contain `..` segments.
//! - Directories are descended at most once. Canonical paths are tracked so a
//!   followed symlink pointing back at an ancestor does not loop.
//! - Only failures on the root abort traversal (reported by
//!   [`WalkBuilder::build`]). Any later failure is yielded as an `Err` item and
//!   iteration resumes with the next entry.
//!
//! # Examples
//!
//! Skip hidden directories while collecting relative paths:
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path();
//! fs::create_dir_all(root.join(".git"))?;
//! fs::create_dir_all(root.join("src"))?;
//! fs::write(root.join(".git/HEAD"), b"ref")?;
//! fs::write(root.join("src/lib.rs"), b"// lib")?;
//!
//! let walker = WalkBuilder::new(root)
//!     .include_root(false)
//!     .filter_directory(|entry| {
//!         !entry.file_name_lossy().starts_with('.')
//!     })
//!     .build()?;
//!
//! let mut seen = Vec::new();
//! for entry in walker {
//!     seen.push(entry?.relative_slash_path());
//! }
//!
//! assert_eq!(seen, ["src", "src/lib.rs"]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use walker::Walker;
