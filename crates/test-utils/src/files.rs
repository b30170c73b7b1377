//! Temporary files for config loading tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Writes `contents` to a temporary file with the given extension (without the dot).
///
/// The file is removed when the returned handle is dropped.
pub fn temp_file_with(contents: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
