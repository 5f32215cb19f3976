//! Snapshot preprocessor: commit-boundary selection, table rewriting, and
//! fence balancing.
//!
//! The downstream renderer has no notion of text that might still grow. It
//! will happily restyle a paragraph into a heading once an underline arrives,
//! or re-balance a table around its widest row. The preprocessor's job is to
//! hand it only text whose rendering can no longer change: committed lines,
//! with tables frozen into pre-laid-out grids and dangling code fences
//! closed.

use super::lines::{
    is_setext_underline_line, is_table_header_line, is_table_row_line, is_table_separator_line,
    parse_table_cells,
};
use crate::table::{grid, TableLayouts};

/// Rewrite the buffered markdown into its committed, stable form.
///
/// When `is_final` is false only complete lines up to the commit boundary are
/// considered; the rest stays buffered for a later pass. When `is_final` is
/// true the whole buffer is committed. Returns an empty string while nothing
/// is committed yet.
///
/// The commit heuristic is best-effort, tuned for continuous token streams:
/// it guards against the block-level reclassifications that matter in
/// practice (paragraph growth, setext underlines, growing tables), not
/// against every construct markdown can resolve non-locally. Reference-style
/// links and deeply nested lists can in principle still reflow earlier
/// output, which is why the delta emitter keeps a rewind fallback.
pub fn preprocess(content: &str, layouts: &mut TableLayouts, is_final: bool) -> String {
    let mut processable = content;
    if !is_final {
        // A trailing partial line may still be extended; never consider it.
        match processable.rfind('\n') {
            Some(idx) => processable = &processable[..=idx],
            None => return String::new(),
        }
    }

    let mut lines: Vec<&str> = processable.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    if !is_final && !lines.is_empty() {
        // Emit only up to the most recent blank-line boundary when possible.
        // This keeps block-level markdown (lists, paragraphs, headings) from
        // retroactively changing already-emitted output in stream mode.
        let mut commit_count = lines
            .iter()
            .rposition(|line| line.trim().is_empty())
            .map_or(0, |i| i + 1);

        if commit_count == 0 {
            // Fallback for continuous logs without blank lines: keep one line
            // buffered to reduce churn from multi-line constructs.
            commit_count = lines.len() - 1;
            if commit_count > 0 && is_setext_underline_line(lines[commit_count - 1]) {
                commit_count -= 1;
            }
        }
        lines.truncate(commit_count);
    }

    let mut out = String::new();
    let mut table_idx = 0;

    let mut i = 0;
    while i < lines.len() {
        if i + 1 < lines.len()
            && is_table_header_line(lines[i])
            && is_table_separator_line(lines[i + 1])
        {
            let headers = parse_table_cells(lines[i]);
            if headers.is_empty() {
                out.push_str(lines[i]);
                out.push('\n');
                i += 1;
                continue;
            }

            // Every call re-scans the committed history from line zero, so a
            // per-scan counter re-derives the same ordinal for a table it has
            // rewritten before.
            let widths = layouts.widths(table_idx, &headers);
            table_idx += 1;

            let mut rows = Vec::new();
            let mut j = i + 2;
            while j < lines.len() && is_table_row_line(lines[j]) {
                rows.push(parse_table_cells(lines[j]));
                j += 1;
            }

            if !rows.is_empty() {
                out.push_str("```text\n");
                out.push_str(&grid::format_fixed_width(&headers, &widths, &rows));
                out.push_str("```\n");
            }

            i = j;
            continue;
        }

        out.push_str(lines[i]);
        out.push('\n');
        i += 1;
    }

    if has_unclosed_code_fence(&out) {
        out.push_str("\n```\n");
    }

    out
}

/// Check whether fence-open/close transitions leave a fence open at the end.
fn has_unclosed_code_fence(s: &str) -> bool {
    let mut open = false;
    for line in s.split('\n') {
        if line.trim().starts_with("```") {
            open = !open;
        }
    }
    open
}
