//! Write-once registry of table column widths.

use unicode_width::UnicodeWidthStr;

/// Minimum column width in display columns, padding included.
pub const MIN_COL_WIDTH: usize = 12;

/// Column-width registry for the tables of a single stream.
///
/// Tables are keyed by ordinal: 0 for the first table encountered in the
/// stream, 1 for the second, and so on. Widths are computed from the header
/// row the first time an ordinal is seen and are immutable afterwards, no
/// matter how wide later cell content turns out to be. The registry only
/// grows; it is valid for the lifetime of one stream.
#[derive(Debug, Default)]
pub struct TableLayouts {
    /// Frozen widths, indexed by table ordinal.
    widths_by_table: Vec<Vec<usize>>,
}

impl TableLayouts {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            widths_by_table: Vec::new(),
        }
    }

    /// Number of tables registered so far.
    pub fn len(&self) -> usize {
        self.widths_by_table.len()
    }

    /// Check if no table has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.widths_by_table.is_empty()
    }

    /// Get the frozen widths for `table_idx`, computing them from `headers`
    /// on first sight.
    ///
    /// Repeat calls ignore `headers` and return the stored widths unchanged.
    /// Each width is `max(MIN_COL_WIDTH, display_width(header) + 2)`, the +2
    /// reserving one padding column per side. Display width is wide-character
    /// aware: CJK and emoji count as two columns.
    pub fn widths(&mut self, table_idx: usize, headers: &[String]) -> Vec<usize> {
        if let Some(widths) = self.widths_by_table.get(table_idx) {
            return widths.clone();
        }

        let widths: Vec<usize> = headers
            .iter()
            .map(|h| MIN_COL_WIDTH.max(UnicodeWidthStr::width(h.trim()) + 2))
            .collect();

        // Ordinals are assigned in first-seen order, so a fresh index is
        // always the next slot.
        debug_assert_eq!(table_idx, self.widths_by_table.len());
        self.widths_by_table.push(widths.clone());
        widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_layout_minimum_width() {
        let mut layouts = TableLayouts::new();
        let widths = layouts.widths(0, &cells(&["id", "note"]));
        assert_eq!(widths, vec![12, 12]);
    }

    #[test]
    fn test_layout_frozen_after_first_sight() {
        let mut layouts = TableLayouts::new();
        let first = layouts.widths(0, &cells(&["id", "note"]));
        let second = layouts.widths(0, &cells(&["identifier", "an extremely long column header"]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_wide_header_reserves_padding() {
        let mut layouts = TableLayouts::new();
        let widths = layouts.widths(0, &cells(&["a very long header cell"]));
        assert_eq!(widths, vec![23 + 2]);
    }

    #[test]
    fn test_layout_wide_characters_count_double() {
        let mut layouts = TableLayouts::new();
        // Eight CJK characters = 16 display columns, +2 padding.
        let widths = layouts.widths(0, &cells(&["設定ファイル名前"]));
        assert_eq!(widths, vec![16 + 2]);
    }

    #[test]
    fn test_layout_independent_tables() {
        let mut layouts = TableLayouts::new();
        let first = layouts.widths(0, &cells(&["id"]));
        let second = layouts.widths(1, &cells(&["a much longer header"]));
        assert_eq!(first, vec![12]);
        assert_eq!(second, vec![22]);
        assert_eq!(layouts.len(), 2);
    }
}
