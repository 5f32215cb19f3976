//! Render module: styled-text production and append-only delta emission.
//!
//! This module contains:
//! - [`bridge`]: the [`MarkdownRenderer`] collaborator seam, the
//!   termimad-backed [`MadRenderer`], style selection, and snapshot
//!   normalization
//! - [`delta`]: the [`DeltaEmitter`], which turns successive snapshots into
//!   the minimal text to append to the sink

pub mod bridge;
pub mod delta;

pub use bridge::{normalize, render_snapshot, MadRenderer, MarkdownRenderer, StyleMode};
pub use delta::DeltaEmitter;
