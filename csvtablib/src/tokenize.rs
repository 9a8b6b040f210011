//! Line splitting and field tokenization.
//!
//! This module turns raw CSV text into trimmed field values. It is
//! deliberately dumb: a comma is always a separator (no quoting or
//! escaping), and `\n` is the only line terminator. A `\r` left behind
//! by CRLF input ends up at the tail of the last field and is stripped
//! by trimming.

/// Whitespace per the C locale's `isspace`: space, tab, newline,
/// vertical tab, form feed, carriage return.
///
/// `char::is_ascii_whitespace` omits vertical tab, so the set is
/// spelled out.
fn is_field_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Trim leading and trailing whitespace from a raw field value.
pub(crate) fn trim_field(raw: &str) -> &str {
    raw.trim_matches(is_field_space)
}

/// Split a line into trimmed field values on literal commas.
///
/// A line always yields (number of commas) + 1 fields, so interior
/// empty fields (`"a,,c"`) are preserved. An all-whitespace field
/// trims down to an empty string rather than being dropped.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.split(',').map(|f| trim_field(f).to_string()).collect()
}

/// Split input text into lines on `\n`, dropping zero-length lines.
///
/// Blank lines (adjacent or trailing `\n`s) produce no row at all. A
/// line consisting only of whitespace is not zero-length: it becomes a
/// row with a single empty field after trimming.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|l| !l.is_empty()).collect()
}

/// Number of fields a line will tokenize into: commas + 1.
pub(crate) fn field_count(line: &str) -> usize {
    line.bytes().filter(|&b| b == b',').count() + 1
}
