//! High-level conversion API.
//!
//! This module provides the main entry point for converting a CSV file
//! into a box-drawn text table file. Each call is self-contained: the
//! input buffer, the parsed table, and both file handles live only for
//! the duration of the call, on every exit path.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::CsvTabError;
use crate::render::render;
use crate::table::Table;
use crate::Result;

/// Maximum input size (100 MiB). Larger files are rejected before any
/// buffering happens, bounding memory use.
pub const MAX_INPUT_BYTES: u64 = 100 * 1024 * 1024;

/// Read the whole input file into memory.
fn load_input(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| CsvTabError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let size = file
        .metadata()
        .map_err(|e| CsvTabError::Read {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();
    if size > MAX_INPUT_BYTES {
        return Err(CsvTabError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_INPUT_BYTES,
        });
    }

    let mut text = String::new();
    text.try_reserve_exact(size as usize)
        .map_err(|_| CsvTabError::Allocation)?;
    file.read_to_string(&mut text).map_err(|e| CsvTabError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(text)
}

/// Format CSV text as a box-drawn table: the pure parse → measure →
/// render pipeline, no I/O.
///
/// A degenerate document (no rows) formats to an empty string.
pub fn format_str(text: &str) -> String {
    render(&Table::parse(text))
}

/// Convert a CSV file into a box-drawn text table file.
///
/// An empty input produces an empty output file and succeeds: the
/// degenerate table is not an error. On any error the conversion is
/// aborted with no retry; buffers and handles are released either way.
///
/// # Example
///
/// ```rust,ignore
/// use csvtablib::convert_file;
///
/// convert_file("input.csv", "output.txt")?;
/// ```
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = load_input(input)?;
    let rendered = format_str(&text);

    let mut out = File::create(output).map_err(|e| CsvTabError::FileWrite {
        path: output.to_path_buf(),
        source: e,
    })?;
    out.write_all(rendered.as_bytes())
        .map_err(|e| CsvTabError::FileWrite {
            path: output.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_convert_writes_rendered_table() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.txt");
        fs::write(&input, "name,age\nAlice,30\n").unwrap();

        convert_file(&input, &output).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, format_str("name,age\nAlice,30\n"));
        assert!(written.starts_with("+=======+=====+\n"));
    }

    #[test]
    fn test_convert_empty_input_creates_empty_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.csv");
        let output = dir.path().join("output.txt");
        fs::write(&input, "").unwrap();

        convert_file(&input, &output).unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"");
    }

    #[test]
    fn test_convert_is_idempotent() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.txt");
        fs::write(&input, "h1,h2\n1,two\n").unwrap();

        convert_file(&input, &output).unwrap();
        let first = fs::read(&output).unwrap();
        convert_file(&input, &output).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_oversized_input_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("huge.csv");
        let output = dir.path().join("out.txt");

        // A sparse file is enough to trip the size cap.
        let file = File::create(&input).unwrap();
        file.set_len(MAX_INPUT_BYTES + 1).unwrap();
        drop(file);

        let result = convert_file(&input, &output);

        assert!(matches!(result, Err(CsvTabError::TooLarge { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_missing_input_is_file_open_error() {
        let dir = tempdir().unwrap();
        let result = convert_file(dir.path().join("nope.csv"), dir.path().join("out.txt"));

        assert!(matches!(result, Err(CsvTabError::FileOpen { .. })));
    }

    #[test]
    fn test_convert_unwritable_output_is_file_write_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        fs::write(&input, "a,b\n").unwrap();

        let result = convert_file(&input, dir.path().join("no/such/dir/out.txt"));

        assert!(matches!(result, Err(CsvTabError::FileWrite { .. })));
    }
}
