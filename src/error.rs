//! Error types for the streaming pipeline.
//!
//! Every failure is fatal to the stream it occurs in: a read error cannot be
//! retried against a live source, and a renderer failure would desynchronize
//! the append-only output. The variants identify which stage failed.

use std::io;

/// A failure inside the external markdown renderer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The renderer could not be constructed for the requested style/width.
    #[error("unable to create renderer: {0}")]
    Construct(String),

    /// The renderer rejected the prepared snapshot text.
    #[error("unable to render markdown: {0}")]
    Render(String),
}

/// A fatal error while driving a stream to completion.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The input source failed mid-stream.
    #[error("unable to read from source: {0}")]
    Read(#[from] io::Error),

    /// The external renderer failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The output sink rejected a write.
    #[error("unable to write stream output: {0}")]
    Write(io::Error),
}
