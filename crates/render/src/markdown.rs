use std::fmt;
use std::io::{self, Write};

use logging::trace_render;

const FENCE: &str = "```";
const SEPARATOR: &[u8] = b"\n---\n\n";

/// Streams file blocks as Markdown.
///
/// The writer is not buffered; wrap the sink in [`io::BufWriter`] when it is
/// a raw handle.
#[derive(Debug)]
pub struct MarkdownWriter<W> {
    out: W,
    blocks: usize,
}

impl<W: Write> MarkdownWriter<W> {
    /// Creates a writer that emits into `out`.
    pub const fn new(out: W) -> Self {
        Self { out, blocks: 0 }
    }

    /// Writes the block for a file that was read successfully.
    pub fn write_file(&mut self, rel: &str, hint: &str, content: &str) -> io::Result<()> {
        self.begin_block(rel)?;
        writeln!(self.out, "{FENCE}{hint}")?;
        self.out.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            // Terminate the last line, then leave a blank line before the fence.
            self.out.write_all(b"\n\n")?;
        }
        writeln!(self.out, "{FENCE}")?;
        trace_render!(path = rel, hint, bytes = content.len(), "wrote file block");
        Ok(())
    }

    /// Writes a placeholder block for a file that could not be read.
    pub fn write_failure(&mut self, rel: &str, error: impl fmt::Display) -> io::Result<()> {
        self.begin_block(rel)?;
        writeln!(self.out, "{FENCE}")?;
        writeln!(self.out, "[Error reading file: {error}]")?;
        writeln!(self.out, "{FENCE}")?;
        trace_render!(path = rel, "wrote failure block");
        Ok(())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn begin_block(&mut self, rel: &str) -> io::Result<()> {
        if self.blocks > 0 {
            self.out.write_all(SEPARATOR)?;
        }
        self.blocks += 1;
        write!(self.out, "### {rel}\n\n")
    }
}
