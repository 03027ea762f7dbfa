#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `render` turns selected files into the Markdown document `dircat` prints.
//! Each file becomes a block made of a level-3 heading with the relative path,
//! a blank line, and a fenced code block tagged with a language hint derived
//! from the file extension. Consecutive blocks are separated by a horizontal
//! rule.
//!
//! # Design
//!
//! - [`language_hint`] maps a path's extension to a fence tag.
//! - [`read_lossy`] loads a file as text, replacing invalid UTF-8 sequences
//!   with U+FFFD instead of failing.
//! - [`MarkdownWriter`] streams blocks into any [`std::io::Write`] and only
//!   writes separators between blocks.
//!
//! # Invariants
//!
//! - File content is written verbatim. When it does not end with `\n`, the
//!   last line is terminated and a blank line follows before the closing
//!   fence.
//! - A file that cannot be read still produces a block, containing a
//!   bracketed placeholder, so the block count equals the record count.
//! - No separator follows the final block.
//!
//! # Examples
//!
//! ```
//! use render::{MarkdownWriter, language_hint};
//! use std::path::Path;
//!
//! let mut writer = MarkdownWriter::new(Vec::new());
//! let hint = language_hint(Path::new("src/main.rs"));
//! writer.write_file("src/main.rs", hint, "fn main() {}").unwrap();
//! writer.write_file("README.md", language_hint(Path::new("README.md")), "# Hi\n").unwrap();
//!
//! let text = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(
//!     text,
//!     "### src/main.rs\n\n```rust\nfn main() {}\n\n```\n\n---\n\n### README.md\n\n```markdown\n# Hi\n```\n"
//! );
//! ```

mod language;
mod markdown;
mod source;

pub use language::language_hint;
pub use markdown::MarkdownWriter;
pub use source::read_lossy;
