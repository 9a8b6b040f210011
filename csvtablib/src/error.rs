//! Error types for csvtablib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a CSV-to-table conversion
#[derive(Error, Debug)]
pub enum CsvTabError {
    /// Failed to open the input file for reading
    #[error("failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read the input file after it was opened
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input exceeds the size cap that bounds memory use
    #[error("file '{path}' is {size} bytes, over the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Failed to allocate internal buffers or table storage
    #[error("allocation failed while building the table")]
    Allocation,

    /// Failed to create or write the output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
