//! # csvtablib
//!
//! A library that reads comma-separated text and renders it as a
//! fixed-width, box-drawn text table.
//!
//! ## Overview
//!
//! The pipeline is strictly sequential: parse → measure → render.
//!
//! - **Tokenizer**: splits on `\n` and literal `,`, trims each field.
//!   No quoting or escaping — a comma is always a separator.
//! - **Shape analysis**: the column count is the maximum field count
//!   over all rows; ragged rows are padded with empty cells, never
//!   rejected. Column widths are per-column byte-length maxima.
//! - **Classifier**: values made of ASCII digits with at most one `.`
//!   count as numeric and are right-aligned in data rows.
//! - **Renderer**: `=` borders, a double-line separator after the
//!   header, `-` separators between data rows, `│` between columns.
//!
//! The whole input is loaded into memory (capped at 100 MiB); there is
//! no streaming, no configurable delimiter, and widths are byte-based
//! rather than Unicode-aware.
//!
//! ## Example
//!
//! ```rust
//! use csvtablib::{convert_file, format_str};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("input.csv");
//! let output = dir.path().join("output.txt");
//! fs::write(&input, "name,age\nAlice,30\nBob,7\n").unwrap();
//!
//! // Convert a file
//! convert_file(&input, &output).unwrap();
//! let table = fs::read_to_string(&output).unwrap();
//! assert!(table.starts_with("+=======+=====+\n"));
//!
//! // Or run the pure pipeline on a string
//! assert_eq!(format_str("name,age\nAlice,30\nBob,7\n"), table);
//!
//! // An empty document renders as nothing at all
//! assert_eq!(format_str(""), "");
//! ```

pub mod classify;
pub mod convert;
pub mod error;
pub mod render;
pub mod table;
pub mod tokenize;

pub use classify::is_numeric;
pub use convert::{convert_file, format_str, MAX_INPUT_BYTES};
pub use error::CsvTabError;
pub use render::render;
pub use table::Table;
pub use tokenize::{split_lines, tokenize_line};

/// Result type for csvtablib operations
pub type Result<T> = std::result::Result<T, CsvTabError>;
