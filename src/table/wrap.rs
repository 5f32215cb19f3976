//! Display-width-aware word wrapping for table cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Wrap a cell's content into lines of at most `width` display columns.
///
/// Embedded newlines are collapsed to spaces before wrapping. Words are
/// packed greedily; a word wider than `width` is hard-broken into
/// grapheme-cluster fragments. Always returns at least one line.
pub fn wrap_cell(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }

    let cell = s.replace('\n', " ");
    let cell = cell.trim();
    if cell.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::with_capacity(1);
    let mut cur = String::new();

    for word in cell.split_whitespace() {
        if UnicodeWidthStr::width(word) > width {
            if !cur.is_empty() {
                lines.push(std::mem::take(&mut cur));
            }
            lines.extend(break_word(word, width));
            continue;
        }

        if cur.is_empty() {
            cur.push_str(word);
            continue;
        }

        if UnicodeWidthStr::width(cur.as_str()) + 1 + UnicodeWidthStr::width(word) <= width {
            cur.push(' ');
            cur.push_str(word);
        } else {
            lines.push(std::mem::take(&mut cur));
            cur.push_str(word);
        }
    }

    if !cur.is_empty() {
        lines.push(cur);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Hard-break a single word into fragments of at most `width` display
/// columns.
///
/// Breaks fall on grapheme cluster boundaries. A single cluster wider than
/// `width` is emitted as its own oversized fragment so the breaker always
/// makes progress.
fn break_word(word: &str, width: usize) -> Vec<String> {
    if width == 0 || word.is_empty() {
        return vec![word.to_string()];
    }

    let mut parts = Vec::new();
    let mut cur = String::new();
    let mut cur_width = 0usize;

    for grapheme in word.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if cur_width + gw > width && !cur.is_empty() {
            parts.push(std::mem::take(&mut cur));
            cur_width = 0;
        }
        cur.push_str(grapheme);
        cur_width += gw;
    }

    if !cur.is_empty() {
        parts.push(cur);
    }
    if parts.is_empty() {
        parts.push(String::new());
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_cell_single_line() {
        assert_eq!(wrap_cell("hello", 10), vec!["hello"]);
    }

    #[test]
    fn test_wrap_packs_words_greedily() {
        assert_eq!(wrap_cell("one two three", 7), vec!["one two", "three"]);
    }

    #[test]
    fn test_wrap_collapses_newlines() {
        assert_eq!(wrap_cell("a\nb", 10), vec!["a b"]);
    }

    #[test]
    fn test_wrap_empty_cell() {
        assert_eq!(wrap_cell("", 10), vec![""]);
        assert_eq!(wrap_cell("   ", 10), vec![""]);
    }

    #[test]
    fn test_wrap_hard_breaks_long_word() {
        let lines = wrap_cell("supercalifragilisticexpialidocious", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 10, "line too wide: {line:?}");
        }
        assert_eq!(lines.concat(), "supercalifragilisticexpialidocious");
    }

    #[test]
    fn test_wrap_wide_characters() {
        // Each character is two columns wide; only three fit per line.
        let lines = wrap_cell("日本語のテスト", 6);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 6);
        }
        assert_eq!(lines.concat(), "日本語のテスト");
    }

    #[test]
    fn test_break_word_oversized_grapheme_makes_progress() {
        // A two-column grapheme in a one-column budget must still terminate.
        assert_eq!(break_word("語", 1), vec!["語"]);
    }
}
