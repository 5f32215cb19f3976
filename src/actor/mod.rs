//! Actor Model: Message-passing concurrency for the streaming pipeline.
//!
//! This module implements a simple actor system using crossbeam channels:
//! - **Reader Actor**: Performs blocking reads against the input source,
//!   forwards chunks to the stream loop
//! - **Ticker**: Emits render ticks at a fixed interval
//! - **Stream Loop**: Sole owner of the buffer, table layouts, and emission
//!   state; processes one event at a time
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐      Chunk        ┌──────────────┐
//! │ Reader Thread │ ───────────────▶  │              │
//! └───────────────┘   bounded(16)     │ Stream Loop  │──▶ output sink
//!                                     │              │
//! ┌───────────────┐      Tick         │              │
//! │ Ticker Thread │ ───────────────▶  │              │
//! └───────────────┘   bounded(2)      └──────────────┘
//! ```
//!
//! The bounded chunk channel is the backpressure mechanism: when the stream
//! loop falls behind, the reader blocks on `send`, which in turn stops
//! pulling from the upstream source. No chunk is ever dropped. Render ticks
//! are the opposite: they are dropped, never queued, when the loop is busy.

mod engine;
mod messages;
mod reader;
mod ticker;

pub use engine::{run_stream, StreamEngine, StreamOptions, RENDER_INTERVAL};
pub use messages::Chunk;
pub use reader::ReaderActor;
pub use ticker::{Tick, Ticker};
