//! Fixed-width monospace grid rendering.
//!
//! Output is plain text: a header row, a dash separator, and word-wrapped
//! data rows, all framed with `|`. The caller wraps the grid in a verbatim
//! code block so the downstream markdown renderer passes it through without
//! re-flowing the columns.

use super::wrap::wrap_cell;
use unicode_width::UnicodeWidthStr;

/// Render a complete table grid from headers, frozen widths, and data rows.
///
/// `widths` and `headers` must describe the same columns. Rows with a
/// different cell count are normalized to the header count: extra cells are
/// dropped, missing cells become blanks. Every line ends with `\n`.
pub fn format_fixed_width(headers: &[String], widths: &[usize], rows: &[Vec<String>]) -> String {
    let col_count = widths.len();
    if col_count == 0 {
        return String::new();
    }

    let headers = normalize_cells(headers, col_count);
    let mut out = String::new();

    out.push_str(&format_row(&headers, widths));
    out.push_str(&format_separator(widths));

    for row in rows {
        let cells = normalize_cells(row, col_count);
        out.push_str(&format_row(&cells, widths));
    }

    out
}

/// Render the separator line: `|` + `max(1, width)` dashes per column + `|`.
fn format_separator(widths: &[usize]) -> String {
    let mut out = String::from("|");
    for &width in widths {
        out.push_str(&"-".repeat(width.max(1)));
        out.push('|');
    }
    out.push('\n');
    out
}

/// Render one data row, possibly spanning multiple wrapped lines.
///
/// The row's height is the tallest wrapped cell; shorter cells pad with
/// blank lines. Cells get one space of padding per side and are space-filled
/// to the column's content width.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut wrapped = Vec::with_capacity(widths.len());
    let mut height = 1;

    for (cell, &width) in cells.iter().zip(widths) {
        let content_width = width.saturating_sub(2).max(1);
        let lines = wrap_cell(cell, content_width);
        height = height.max(lines.len());
        wrapped.push(lines);
    }

    let mut out = String::new();
    for line_idx in 0..height {
        out.push('|');
        for (col_idx, &width) in widths.iter().enumerate() {
            let content_width = width.saturating_sub(2).max(1);
            let segment = wrapped[col_idx]
                .get(line_idx)
                .map_or("", String::as_str);

            let padding = content_width.saturating_sub(UnicodeWidthStr::width(segment));
            out.push(' ');
            out.push_str(segment);
            out.push_str(&" ".repeat(padding));
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out
}

/// Normalize a cell array to exactly `cols` trimmed cells.
fn normalize_cells(cells: &[String], cols: usize) -> Vec<String> {
    (0..cols)
        .map(|i| cells.get(i).map_or_else(String::new, |c| c.trim().to_string()))
        .collect()
}
