//! Bridge to the external markdown renderer.
//!
//! The pipeline treats the renderer as a pure function from text to styled
//! text for a fixed style and width; no incremental state is assumed or
//! exploited. The default implementation is backed by termimad, whose
//! line-oriented rendering preserves newlines by construction.

use crate::error::RenderError;
use crate::snapshot::preprocess;
use crate::table::TableLayouts;
use termimad::MadSkin;

/// The external renderer seam.
///
/// Implementations must be pure and stateless: rendering the same text twice
/// yields the same styled output. The streaming engine relies on this to
/// compare successive snapshots byte-for-byte.
pub trait MarkdownRenderer {
    /// Render markdown into styled terminal text.
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// Style selection for the default renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    /// Colors tuned for dark terminal backgrounds.
    #[default]
    Dark,
    /// Colors tuned for light terminal backgrounds.
    Light,
    /// No styling at all (plain text output).
    Plain,
}

impl StyleMode {
    /// Build the termimad skin for this mode.
    fn skin(self) -> MadSkin {
        match self {
            Self::Dark => MadSkin::default_dark(),
            Self::Light => MadSkin::default_light(),
            Self::Plain => MadSkin::no_style(),
        }
    }
}

/// Termimad-backed markdown renderer with a fixed skin and wrap width.
pub struct MadRenderer {
    skin: MadSkin,
    width: usize,
}

impl MadRenderer {
    /// Create a renderer for the given style and wrap width.
    pub fn new(style: StyleMode, width: usize) -> Self {
        Self {
            skin: style.skin(),
            width,
        }
    }
}

impl MarkdownRenderer for MadRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let text = self.skin.text(markdown, Some(self.width));
        Ok(text.to_string())
    }
}

/// Render the current buffer into a styled snapshot.
///
/// Returns `Ok(None)` when there is nothing worth rendering yet: while
/// streaming, a buffer without a single line break is only a partial first
/// line, and re-rendering it would show nothing committed.
pub fn render_snapshot<R: MarkdownRenderer>(
    content: &str,
    layouts: &mut TableLayouts,
    renderer: &R,
    is_final: bool,
) -> Result<Option<String>, RenderError> {
    if !is_final && !content.contains('\n') {
        return Ok(None);
    }

    let prepared = preprocess(content, layouts, is_final);
    let styled = renderer.render(&prepared)?;
    Ok(Some(styled))
}

/// Normalize a rendered snapshot for comparison and emission.
///
/// Trailing spaces and tabs are stripped from every line and trailing line
/// breaks are stripped from the whole text. Renderers pad lines to the wrap
/// width and append terminating newlines; both would make every snapshot
/// differ from its own earlier prefix.
pub fn normalize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = s
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect();
    lines.join("\n").trim_end_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renderer that returns its input unchanged, for exact assertions.
    struct Passthrough;

    impl MarkdownRenderer for Passthrough {
        fn render(&self, markdown: &str) -> Result<String, RenderError> {
            Ok(markdown.to_string())
        }
    }

    #[test]
    fn test_snapshot_skipped_without_newline() {
        let mut layouts = TableLayouts::new();
        let out = render_snapshot("partial line", &mut layouts, &Passthrough, false).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_snapshot_final_renders_partial_line() {
        let mut layouts = TableLayouts::new();
        let out = render_snapshot("partial line", &mut layouts, &Passthrough, true).unwrap();
        assert_eq!(out.as_deref(), Some("partial line\n"));
    }

    #[test]
    fn test_snapshot_grows_monotonically() {
        let mut layouts = TableLayouts::new();
        let first = render_snapshot("a\nb\n", &mut layouts, &Passthrough, false)
            .unwrap()
            .unwrap();
        let second = render_snapshot("a\nb\nc\n", &mut layouts, &Passthrough, false)
            .unwrap()
            .unwrap();

        let first = normalize(&first);
        let second = normalize(&second);
        assert!(
            second.starts_with(&first),
            "expected second snapshot to extend first\nfirst:\n{first:?}\nsecond:\n{second:?}"
        );
    }

    #[test]
    fn test_snapshot_prefix_holds_for_setext_heading() {
        let mut layouts = TableLayouts::new();
        let first = render_snapshot("Title\n", &mut layouts, &Passthrough, false)
            .unwrap()
            .unwrap();
        let second = render_snapshot("Title\n=====\n", &mut layouts, &Passthrough, false)
            .unwrap()
            .unwrap();

        let first = normalize(&first);
        let second = normalize(&second);
        assert!(
            second.starts_with(&first),
            "expected second snapshot to extend first\nfirst:\n{first:?}\nsecond:\n{second:?}"
        );
    }

    #[test]
    fn test_normalize_strips_trailing_whitespace() {
        assert_eq!(normalize("a  \nb\t\n\n"), "a\nb");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n"), "");
    }

    #[test]
    fn test_mad_renderer_styles_text() {
        let renderer = MadRenderer::new(StyleMode::Plain, 80);
        let out = renderer.render("plain words\n").unwrap();
        assert!(out.contains("plain words"));
    }
}
