//! # csvtab
//!
//! A CLI tool that renders a CSV file as a fixed-width box-drawn text
//! table.
//!
//! ## Overview
//!
//! csvtab is a thin wrapper around csvtablib: it parses the two path
//! arguments, runs the conversion, and maps each error kind to a
//! human-readable message and an exit status. All pipeline logic lives
//! in the library; the CLI never touches the table itself.
//!
//! ## Usage
//!
//! ```bash
//! # Convert input.csv to output.txt (the defaults)
//! csvtab
//!
//! # Explicit paths
//! csvtab data.csv table.txt
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, Command};
use console::Style;
use csvtablib::{convert_file, CsvTabError};

/// Default paths when no arguments are given
const DEFAULT_INPUT: &str = "input.csv";
const DEFAULT_OUTPUT: &str = "output.txt";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("csvtab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render a CSV file as a fixed-width box-drawn text table")
        .arg(
            Arg::new("input")
                .help("CSV file to read")
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::new("output")
                .help("Text file the table is written to")
                .default_value(DEFAULT_OUTPUT),
        )
}

/// Map an error kind to its user-facing message and exit status.
fn describe(error: &CsvTabError) -> (&'static str, u8) {
    match error {
        CsvTabError::FileOpen { .. } => ("File opening error", 1),
        CsvTabError::Allocation => ("Memory allocation error", 2),
        CsvTabError::Read { .. } | CsvTabError::TooLarge { .. } => ("File reading error", 3),
        CsvTabError::FileWrite { .. } => ("File writing error", 1),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_INPUT);
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_OUTPUT);

    match convert_file(PathBuf::from(input), PathBuf::from(output)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let (message, code) = describe(&error);
            let prefix = Style::new().red().bold();
            eprintln!("{} {}: {}", prefix.apply_to("Error:"), message, error);
            ExitCode::from(code)
        }
    }
}
