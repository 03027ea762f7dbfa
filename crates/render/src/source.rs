use std::fs;
use std::io;
use std::path::Path;

use logging::trace_render;

/// Reads `path` as text, substituting U+FFFD for invalid UTF-8 sequences.
///
/// # Errors
///
/// Returns the I/O error from opening or reading the file. Decoding never
/// fails.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(error) => {
            trace_render!(path = %path.display(), "replaced invalid UTF-8 sequences");
            Ok(String::from_utf8_lossy(error.as_bytes()).into_owned())
        }
    }
}
