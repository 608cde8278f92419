//! Synchronized logging aggregate
//!
//! Serializes every file write and mirror write behind a single lock so
//! the line pump and the shutdown watcher can share the logger safely.

use std::io::Write;
use std::sync::Mutex;

use tracing::warn;

use super::writer::RotatingFileWriter;

/// Notice mirrored when the current log file is closed.
const CLOSE_NOTICE: &str = "logger: closing file\n";

/// Thread-safe logger that persists lines to rotating files and mirrors
/// them to an output stream.
///
/// Both entry points hold one lock for their full duration: concurrent
/// callers can never interleave partial writes or observe a half-finished
/// rotation, and the mirror stream sees lines in exactly the order the
/// files do. No operation here is fatal; every I/O failure is downgraded
/// to a diagnostic.
pub struct Logger {
    inner: Mutex<Inner>,
}

struct Inner {
    writer: RotatingFileWriter,
    mirror: Box<dyn Write + Send>,
}

impl Logger {
    /// Create a logger around a file writer and a mirror stream.
    pub fn new(writer: RotatingFileWriter, mirror: Box<dyn Write + Send>) -> Self {
        Self {
            inner: Mutex::new(Inner { writer, mirror }),
        }
    }

    /// Persist one newline-terminated line and mirror it verbatim to the
    /// output stream.
    ///
    /// Persistence failures are downgraded to diagnostics; the line is
    /// mirrored regardless.
    pub fn write_line(&self, line: &str) {
        let mut inner = self.lock();
        if let Err(e) = inner.writer.append(line) {
            warn!("failed to persist line: {e:#}");
        }
        if let Err(e) = inner.mirror.write_all(line.as_bytes()) {
            warn!("failed to mirror line: {e}");
        }
        let _ = inner.mirror.flush();
    }

    /// Close the current log file, mirroring a closing notice first.
    ///
    /// Calling close when no file is open is a no-op: no notice, no error.
    pub fn close(&self) {
        let mut inner = self.lock();
        if inner.writer.is_open() {
            if let Err(e) = inner.mirror.write_all(CLOSE_NOTICE.as_bytes()) {
                warn!("failed to mirror close notice: {e}");
            }
            let _ = inner.mirror.flush();
            inner.writer.close();
        }
    }

    /// A poisoned lock still guards consistent state; keep logging.
    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
