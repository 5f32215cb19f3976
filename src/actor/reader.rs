//! Reader Actor: Dedicated thread for blocking reads against the source.
//!
//! The reader performs blocking reads so the stream loop never has to. It
//! pushes owned chunks into a bounded channel; a full channel blocks the
//! reader's `send`, which is what applies backpressure to the upstream
//! source.

use super::messages::Chunk;
use crossbeam_channel::Sender;
use std::io::{ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Read buffer size in bytes.
const READ_BUF_SIZE: usize = 4096;

/// Reader actor that pulls bytes from a blocking source.
pub struct ReaderActor {
    /// Handle to the reader thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl ReaderActor {
    /// Spawn the reader actor thread.
    ///
    /// The channel is closed when the actor returns, always after an `Eof`
    /// or `Error` marker (or after a shutdown request).
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the reader thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn<R>(source: R, sender: Sender<Chunk>) -> Self
    where
        R: Read + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("ballast-reader".to_string())
            .spawn(move || {
                Self::run_loop(source, &sender, &shutdown_clone);
            })
            .expect("Failed to spawn reader thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the reader to stop before its next read.
    ///
    /// A reader blocked inside `read` cannot be interrupted; the flag is
    /// honored at the next loop iteration.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the reader thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main read loop.
    fn run_loop<R: Read>(mut source: R, sender: &Sender<Chunk>, shutdown: &AtomicBool) {
        let mut buf = [0u8; READ_BUF_SIZE];

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match source.read(&mut buf) {
                Ok(0) => {
                    let _ = sender.send(Chunk::Eof);
                    break;
                }
                Ok(n) => {
                    // Owned copy: the chunk outlives this iteration's buffer.
                    if sender.send(Chunk::Data(buf[..n].to_vec())).is_err() {
                        // Receiver dropped, exit
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    debug!(error = %e, "source read failed");
                    let _ = sender.send(Chunk::Error(e));
                    break;
                }
            }
        }
    }
}

impl Drop for ReaderActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
