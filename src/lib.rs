//! # Ballast
//!
//! An append-only streaming markdown renderer for agentic CLIs.
//!
//! Ballast takes markdown that arrives incrementally (token streams, live
//! process logs) and writes styled terminal output that never rewrites
//! itself: once a byte has been emitted, later input can only extend it.
//!
//! ## Core Concepts
//!
//! - **Commit boundary**: only lines that no plausible future input can
//!   restyle are handed to the renderer
//! - **Fixed-width table rewrite**: markdown tables are frozen into a
//!   monospace grid so growing rows cannot re-flow columns
//! - **Snapshot deltas**: each render is compared against the last emission
//!   and only the new suffix is written
//! - **Actor model**: a blocking reader thread and a render ticker feed a
//!   single consumer loop over bounded channels
//!
//! ## Example
//!
//! ```rust,ignore
//! use ballast::{run_stream, StreamOptions};
//!
//! run_stream(std::io::stdin(), std::io::stdout(), StreamOptions::default())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod error;
pub mod render;
pub mod snapshot;
pub mod table;

// Re-exports for convenience
pub use actor::{run_stream, Chunk, ReaderActor, StreamEngine, StreamOptions, Ticker};
pub use error::{RenderError, StreamError};
pub use render::{MadRenderer, MarkdownRenderer, StyleMode};
pub use table::TableLayouts;
