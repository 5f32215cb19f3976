//! Append-only delta computation between rendered snapshots.
//!
//! The commit policy upstream is supposed to guarantee that every new
//! snapshot literally starts with the previous one, so the delta is normally
//! the plain suffix. The rewind fallback below exists for the cases the
//! policy cannot prove: it never erases written output, it only re-emits
//! from the last line boundary that still agreed.

use tracing::warn;

/// Compute the text to append to advance written output from `prev` to
/// `next`.
///
/// Returns a slice of `next`: the exact suffix when `next` starts with
/// `prev`, otherwise the tail of `next` from the line boundary at or before
/// the longest common byte prefix.
pub fn delta<'a>(prev: &str, next: &'a str) -> &'a str {
    if prev.is_empty() {
        return next;
    }
    if let Some(suffix) = next.strip_prefix(prev) {
        return suffix;
    }

    let prev_bytes = prev.as_bytes();
    let next_bytes = next.as_bytes();
    let limit = prev_bytes.len().min(next_bytes.len());
    let mut i = 0;
    while i < limit && prev_bytes[i] == next_bytes[i] {
        i += 1;
    }

    // Keep append-only chunks aligned to full lines. The scan is over bytes
    // because the common prefix may end inside a multi-byte character.
    let i = next_bytes[..i]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |j| j + 1);

    warn!(
        rewind_to = i,
        "snapshot diverged from emitted prefix; re-emitting from line boundary"
    );
    &next[i..]
}

/// Tracks the last emitted snapshot and produces deltas against it.
#[derive(Debug, Default)]
pub struct DeltaEmitter {
    /// The most recent snapshot actually written; empty before any emission.
    last: String,
}

impl DeltaEmitter {
    /// Create an emitter with nothing written yet.
    pub const fn new() -> Self {
        Self {
            last: String::new(),
        }
    }

    /// The last emitted snapshot.
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Check if any content has been emitted.
    pub fn has_emitted(&self) -> bool {
        !self.last.is_empty()
    }

    /// Advance to `next`, returning the text to write, if any.
    ///
    /// `last` is updated whenever `next` differs from it, even when the
    /// computed delta happens to be empty; normalized equality is the only
    /// thing that leaves it untouched.
    pub fn advance(&mut self, next: &str) -> Option<String> {
        if next == self.last {
            return None;
        }

        let delta = delta(&self.last, next);
        let out = if delta.is_empty() {
            None
        } else {
            Some(delta.to_string())
        };
        self.last = next.to_string();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_from_empty_is_whole_snapshot() {
        assert_eq!(delta("", "hello\n"), "hello\n");
    }

    #[test]
    fn test_delta_prefix_case_is_exact_suffix() {
        assert_eq!(delta("a\nb", "a\nb\nc"), "\nc");
        assert_eq!(delta("abc", "abc"), "");
    }

    #[test]
    fn test_delta_rewinds_to_line_boundary() {
        assert_eq!(delta("a\nb\nc\n", "a\nb\nX\nc\n"), "X\nc\n");
    }

    #[test]
    fn test_delta_total_divergence_reemits_everything() {
        assert_eq!(delta("abc", "xyz"), "xyz");
    }

    #[test]
    fn test_delta_never_splits_a_line() {
        // Common prefix is "line one is lon", mid-line; the rewind backs up
        // to the start of that line.
        assert_eq!(
            delta("intro\nline one is long\n", "intro\nline one is leaner\n"),
            "line one is leaner\n"
        );
    }

    #[test]
    fn test_emitter_updates_last_even_for_empty_delta() {
        let mut emitter = DeltaEmitter::new();
        assert_eq!(emitter.advance("a\nb"), Some("a\nb".to_string()));

        // "a\nx" shares only "a\n" with the last emission; the delta "x" is
        // written and last tracks the newest snapshot.
        assert_eq!(emitter.advance("a\nx"), Some("x".to_string()));
        assert_eq!(emitter.last(), "a\nx");

        assert_eq!(emitter.advance("a\nx"), None);
        assert!(emitter.has_emitted());
    }

    #[test]
    fn test_emitter_nothing_before_first_snapshot() {
        let emitter = DeltaEmitter::new();
        assert!(!emitter.has_emitted());
        assert_eq!(emitter.last(), "");
    }
}
