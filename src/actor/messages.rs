//! Message types for actor communication.

use std::io;

/// A unit handed from the reader actor to the stream loop.
///
/// Exactly one of the three forms per chunk: the reader sends any buffered
/// data first, then a separate end-of-stream or error marker, and nothing
/// after a marker.
#[derive(Debug)]
pub enum Chunk {
    /// Bytes read from the source.
    Data(Vec<u8>),

    /// The source reached end-of-stream cleanly.
    Eof,

    /// The source failed; the stream aborts with no further emission.
    Error(io::Error),
}
