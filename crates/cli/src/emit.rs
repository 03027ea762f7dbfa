//! Document emission.

use std::io::{BufWriter, Write};
use std::path::Path;

use render::{MarkdownWriter, language_hint, read_lossy};

use crate::collect::FileRecord;
use crate::error::CliError;

/// Counts reported after the document has been written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EmitSummary {
    /// Files whose content was written.
    pub written: usize,
    /// Files replaced by a placeholder because they could not be read.
    pub failed: usize,
}

/// Writes one Markdown block per record to `stdout`.
///
/// Each file is read only when its block is written. A file that cannot be
/// read is reported on `stderr` as `Error reading <rel>: <error>` and
/// replaced by a placeholder block.
///
/// # Errors
///
/// Returns [`CliError::Output`] when writing to `stdout` fails. Failures
/// writing diagnostics to `stderr` are ignored.
pub fn emit_document<Out, Err>(
    records: &[FileRecord],
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<EmitSummary, CliError>
where
    Out: Write,
    Err: Write,
{
    let mut writer = MarkdownWriter::new(BufWriter::new(stdout));
    let mut summary = EmitSummary::default();

    for record in records {
        let rel = record.relative();
        match read_lossy(record.full_path()) {
            Ok(content) => {
                writer.write_file(rel, language_hint(Path::new(rel)), &content)?;
                summary.written += 1;
            }
            Err(error) => {
                tracing::debug!(target: "dircat::render", path = rel, %error, "failed to read file");
                let _ = writeln!(stderr, "Error reading {rel}: {error}");
                writer.write_failure(rel, &error)?;
                summary.failed += 1;
            }
        }
    }

    writer.flush()?;
    tracing::info!(
        target: "dircat::render",
        written = summary.written,
        failed = summary.failed,
        "document complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(root: &Path, rel: &str) -> FileRecord {
        FileRecord::new(root.join(rel), rel.to_owned())
    }

    #[test]
    fn empty_record_list_writes_nothing() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let summary = emit_document(&[], &mut stdout, &mut stderr).expect("emit");

        assert_eq!(summary, EmitSummary::default());
        assert!(stdout.is_empty());
        assert!(stderr.is_empty());
    }

    #[test]
    fn writes_blocks_with_hints_in_record_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a.py"), "print(1)\n").expect("write");
        fs::write(temp.path().join("b.md"), "# hi").expect("write");

        let records = [record(temp.path(), "a.py"), record(temp.path(), "b.md")];
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let summary = emit_document(&records, &mut stdout, &mut stderr).expect("emit");

        assert_eq!(summary.written, 2);
        assert_eq!(
            String::from_utf8(stdout).expect("utf8"),
            "### a.py\n\n```python\nprint(1)\n```\n\n---\n\n### b.md\n\n```markdown\n# hi\n\n```\n"
        );
        assert!(stderr.is_empty());
    }

    #[test]
    fn unreadable_record_gets_placeholder_and_diagnostic() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("z.rs"), "fn z() {}\n").expect("write");
        let records = [
            record(temp.path(), "gone.rs"),
            record(temp.path(), "z.rs"),
        ];

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let summary = emit_document(&records, &mut stdout, &mut stderr).expect("emit");

        assert_eq!(summary, EmitSummary { written: 1, failed: 1 });
        let out = String::from_utf8(stdout).expect("utf8");
        assert!(out.starts_with("### gone.rs\n\n```\n[Error reading file: "));
        assert!(out.ends_with("### z.rs\n\n```rust\nfn z() {}\n```\n"));
        let err = String::from_utf8(stderr).expect("utf8");
        assert!(err.starts_with("Error reading gone.rs: "), "{err}");
    }

    #[test]
    fn stdout_failure_is_an_output_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
        }

        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a.txt"), "a").expect("write");
        let records = [record(temp.path(), "a.txt")];

        let mut stderr = Vec::new();
        let error = emit_document(&records, &mut Closed, &mut stderr).unwrap_err();
        assert!(matches!(error, CliError::Output(_)));
    }
}
