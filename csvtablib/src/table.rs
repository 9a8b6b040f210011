//! The materialized table model.
//!
//! `Table` is the render-ready data structure: every row padded to the
//! full column count, per-column widths precomputed. The data flow is:
//!
//! 1. Raw text (one `String`, the whole input)
//! 2. Tokenized lines (trimmed field values)
//! 3. `Table` (rectangular: rows padded, widths known)

use serde::{Deserialize, Serialize};

use crate::tokenize::{field_count, split_lines, tokenize_line};

/// A parsed CSV document, materialized for rendering.
///
/// Row 0 is the header; "header" is purely positional and a header row
/// is otherwise an ordinary row of cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Rows in source order. Every row holds exactly `widths.len()`
    /// cells: rows with fewer raw fields are padded with empty strings,
    /// and no row is ever truncated because the column count is the
    /// observed maximum.
    pub rows: Vec<Vec<String>>,
    /// Per-column maximum cell byte length, header included.
    pub widths: Vec<usize>,
}

impl Table {
    /// Parse CSV text into a rectangular table.
    ///
    /// The column count is fixed by a first pass over the lines before
    /// any row is materialized; the second pass tokenizes, pads ragged
    /// rows with empty cells, and tracks per-column widths. Ragged
    /// input is supported, never an error.
    pub fn parse(text: &str) -> Self {
        let lines = split_lines(text);
        let column_count = lines.iter().map(|l| field_count(l)).max().unwrap_or(0);

        let mut widths = vec![0usize; column_count];
        let mut rows = Vec::with_capacity(lines.len());

        for line in lines {
            let mut cells = tokenize_line(line);
            cells.resize(column_count, String::new());

            for (cell, width) in cells.iter().zip(widths.iter_mut()) {
                *width = (*width).max(cell.len());
            }

            rows.push(cells);
        }

        Table { rows, widths }
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns: the maximum field count over all rows.
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// A degenerate document: nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.widths.is_empty()
    }
}
