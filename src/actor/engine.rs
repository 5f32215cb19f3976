//! Stream Loop: the single consumer that drives the pipeline.
//!
//! The engine owns every piece of mutable stream state (input buffer, table
//! layouts, emission bookkeeping) and processes one event at a time from
//! two sources: incoming chunks and render ticks. Because nothing else
//! touches that state, no locking is required.
//!
//! The loop is a small state machine: it idles until chunks arrive, renders
//! on ticks while the buffer is dirty, drains with one final render when the
//! source ends, and closes after the final emission.

use super::messages::Chunk;
use super::reader::ReaderActor;
use super::ticker::{Tick, Ticker};
use crate::error::StreamError;
use crate::render::bridge::{normalize, render_snapshot, MadRenderer, MarkdownRenderer, StyleMode};
use crate::render::delta::DeltaEmitter;
use crate::table::TableLayouts;
use crossbeam_channel::{bounded, select, Receiver};
use crossterm::terminal;
use std::io::{Read, Write};
use std::time::Duration;
use tracing::{debug, trace};

/// Interval between render passes.
pub const RENDER_INTERVAL: Duration = Duration::from_millis(200);

/// Capacity of the chunk queue between reader and stream loop.
const CHUNK_QUEUE_CAPACITY: usize = 16;

/// Wrap width used when the terminal width cannot be detected.
const DEFAULT_WIDTH: usize = 80;

/// Configuration for a streaming render.
#[derive(Debug, Clone)]
pub struct StreamOptions {
    /// Style for the default renderer.
    pub style: StyleMode,
    /// Wrap width in display columns.
    pub width: usize,
    /// Interval between render passes.
    pub render_interval: Duration,
    /// Chunk queue capacity (backpressure threshold).
    pub queue_capacity: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        let width = terminal::size().map_or(DEFAULT_WIDTH, |(w, _)| usize::from(w));
        Self {
            style: StyleMode::default(),
            width,
            render_interval: RENDER_INTERVAL,
            queue_capacity: CHUNK_QUEUE_CAPACITY,
        }
    }
}

/// The streaming render engine.
///
/// Owns the append-only input buffer, the table layout registry, and the
/// delta emitter for the lifetime of one stream. Exclusive ownership is the
/// concurrency model: the engine runs on exactly one thread and the actors
/// only ever talk to it through channels.
pub struct StreamEngine<R> {
    /// The external renderer.
    renderer: R,
    /// Raw bytes received so far; append-only.
    input: Vec<u8>,
    /// Frozen table column widths.
    layouts: TableLayouts,
    /// Last-emitted snapshot tracking.
    emitter: DeltaEmitter,
    /// Whether the buffer changed since the last render pass.
    dirty: bool,
}

impl<R: MarkdownRenderer> StreamEngine<R> {
    /// Create an engine around the given renderer.
    pub const fn new(renderer: R) -> Self {
        Self {
            renderer,
            input: Vec::new(),
            layouts: TableLayouts::new(),
            emitter: DeltaEmitter::new(),
            dirty: false,
        }
    }

    /// Run the event loop until end-of-stream or a fatal error.
    ///
    /// # Errors
    ///
    /// Returns the first read, render, or write failure; all are fatal and
    /// nothing further is emitted after one.
    pub fn run<W: Write>(
        &mut self,
        chunks: &Receiver<Chunk>,
        ticks: &Receiver<Tick>,
        sink: &mut W,
    ) -> Result<(), StreamError> {
        loop {
            select! {
                recv(chunks) -> msg => match msg {
                    Ok(Chunk::Data(bytes)) => {
                        if !bytes.is_empty() {
                            self.input.extend_from_slice(&bytes);
                            self.dirty = true;
                        }
                    }
                    Ok(Chunk::Error(e)) => return Err(StreamError::Read(e)),
                    // A closed channel without a marker means the reader died
                    // abnormally; draining is the safe interpretation.
                    Ok(Chunk::Eof) | Err(_) => return self.finish(sink),
                },
                recv(ticks) -> tick => {
                    if tick.is_ok() && self.dirty {
                        self.emit(sink, false)?;
                        self.dirty = false;
                    }
                }
            }
        }
    }

    /// Drain: one final render regardless of the dirty flag, then close.
    fn finish<W: Write>(&mut self, sink: &mut W) -> Result<(), StreamError> {
        self.emit(sink, true)?;

        if self.emitter.has_emitted() {
            // Visually separate the stream from whatever the caller prints
            // next.
            sink.write_all(b"\n\n").map_err(StreamError::Write)?;
            sink.flush().map_err(StreamError::Write)?;
        }

        debug!(bytes = self.input.len(), "stream drained");
        Ok(())
    }

    /// Render the current buffer and write the delta, if any.
    fn emit<W: Write>(&mut self, sink: &mut W, is_final: bool) -> Result<(), StreamError> {
        let content = String::from_utf8_lossy(&self.input);
        let Some(rendered) =
            render_snapshot(content.as_ref(), &mut self.layouts, &self.renderer, is_final)?
        else {
            return Ok(());
        };

        let normalized = normalize(&rendered);
        let Some(delta) = self.emitter.advance(&normalized) else {
            return Ok(());
        };

        trace!(bytes = delta.len(), is_final, "emitting delta");
        sink.write_all(delta.as_bytes()).map_err(StreamError::Write)?;
        sink.flush().map_err(StreamError::Write)?;
        Ok(())
    }
}

/// Stream markdown from `source` to `sink` until end-of-stream.
///
/// This is the pipeline's entry point: it spawns the reader and ticker
/// actors, runs the stream loop on the calling thread, and tears the actors
/// down when the loop returns.
///
/// # Errors
///
/// Returns the first read, render, or write failure. The stream either
/// completes (possibly empty) or fails; there is no partial-success mode and
/// no retry.
pub fn run_stream<R, W>(source: R, mut sink: W, options: StreamOptions) -> Result<(), StreamError>
where
    R: Read + Send + 'static,
    W: Write,
{
    let (chunk_tx, chunk_rx) = bounded(options.queue_capacity);
    let reader = ReaderActor::spawn(source, chunk_tx);
    let ticker = Ticker::spawn(options.render_interval);

    let renderer = MadRenderer::new(options.style, options.width);
    let mut engine = StreamEngine::new(renderer);
    let result = engine.run(&chunk_rx, ticker.receiver(), &mut sink);

    ticker.join();
    if result.is_ok() {
        reader.join();
    } else {
        // The reader may still be blocked inside a read; signal it and let
        // it exit on its own rather than blocking here.
        reader.shutdown();
    }

    result
}
