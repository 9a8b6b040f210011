//! Box-drawing table rendering.
//!
//! Layout rules:
//!
//! - Top border and the separator after the header use `=` fill; the
//!   separators between data rows use `-`. Junctions are `+`.
//! - The bottom border reuses `=` when the table has exactly one row
//!   (a header-only table keeps the double look), `-` otherwise.
//! - Each cell is padded to its column width plus one space on each
//!   side. The header row is always left-aligned; data cells are
//!   right-aligned when numeric, left-aligned otherwise.
//! - Columns are separated by `│` (U+2502) inside a row; the outer
//!   border on both sides is the ASCII `|`.
//!
//! Padding is byte-length based, matching the byte-length widths
//! computed by [`Table::parse`].

use crate::classify::is_numeric;
use crate::table::Table;

/// Interior column separator, distinct from the ASCII outer border.
const COLUMN_SEPARATOR: char = '\u{2502}';

/// A horizontal rule: `+` junctions, each column spanned by
/// `width + 2` copies of `fill`.
fn rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for &width in widths {
        for _ in 0..width + 2 {
            line.push(fill);
        }
        line.push('+');
    }
    line.push('\n');
    line
}

/// Append one cell: a space, the value padded to `width`, a space.
fn push_cell(out: &mut String, value: &str, width: usize, right_align: bool) {
    let padding = width.saturating_sub(value.len());
    out.push(' ');
    if right_align {
        out.extend(std::iter::repeat(' ').take(padding));
        out.push_str(value);
    } else {
        out.push_str(value);
        out.extend(std::iter::repeat(' ').take(padding));
    }
    out.push(' ');
}

/// Render a table as fixed-width box-drawn text.
///
/// A degenerate table (zero rows or zero columns) renders as an empty
/// string: no borders are drawn at all.
pub fn render(table: &Table) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&rule(&table.widths, '='));

    let last_row = table.row_count() - 1;

    for (row_index, row) in table.rows.iter().enumerate() {
        out.push('|');
        for (column_index, cell) in row.iter().enumerate() {
            let right_align = row_index > 0 && is_numeric(cell);
            push_cell(&mut out, cell, table.widths[column_index], right_align);
            if column_index < row.len() - 1 {
                out.push(COLUMN_SEPARATOR);
            }
        }
        out.push_str("|\n");

        if row_index < last_row {
            let fill = if row_index == 0 { '=' } else { '-' };
            out.push_str(&rule(&table.widths, fill));
        }
    }

    let bottom_fill = if table.row_count() == 1 { '=' } else { '-' };
    out.push_str(&rule(&table.widths, bottom_fill));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_shape() {
        assert_eq!(rule(&[1, 2], '='), "+===+====+\n");
        assert_eq!(rule(&[0], '-'), "+--+\n");
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render(&Table::parse("")), "");
    }

    #[test]
    fn test_render_basic_table() {
        let table = Table::parse("name,age\nAlice,30\nBob,7\n");
        let expected = "\
+=======+=====+
| name  \u{2502} age |
+=======+=====+
| Alice \u{2502}  30 |
+-------+-----+
| Bob   \u{2502}   7 |
+-------+-----+
";
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn test_render_header_only_uses_double_bottom_border() {
        let table = Table::parse("name,age\n");
        let expected = "\
+======+=====+
| name \u{2502} age |
+======+=====+
";
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn test_render_header_is_left_aligned_even_when_numeric() {
        let table = Table::parse("2024,total\n1,2\n");
        let rendered = render(&table);
        assert!(rendered.contains("| 2024 \u{2502} total |"));
        assert!(rendered.contains("|    1 \u{2502}     2 |"));
    }

    #[test]
    fn test_render_text_cells_are_left_aligned() {
        let table = Table::parse("id,who\n1,Alice\n22,Bo\n");
        let rendered = render(&table);
        assert!(rendered.contains("|  1 \u{2502} Alice |"));
        assert!(rendered.contains("| 22 \u{2502} Bo    |"));
    }

    #[test]
    fn test_render_ragged_row_pads_missing_cells() {
        let table = Table::parse("a,b,c\nd\n");
        let rendered = render(&table);
        assert!(rendered.contains("| d \u{2502}   \u{2502}   |"));
    }

    #[test]
    fn test_render_cell_span_is_width_plus_two() {
        let table = Table::parse("name,age\nAlice,30\n");
        for line in render(&table).lines() {
            // Between separators each column spans width + 2 chars.
            let body: Vec<char> = line.chars().collect();
            assert_eq!(body.len(), 1 + (5 + 2) + 1 + (3 + 2) + 1);
        }
    }

    #[test]
    fn test_render_single_column() {
        let table = Table::parse("only\nrow\n");
        let expected = "\
+======+
| only |
+======+
| row  |
+------+
";
        assert_eq!(render(&table), expected);
    }
}
