//! Rotating log file writer
//!
//! Owns the currently-open log file, rolls to a fresh one once the line
//! count passes the configured threshold, and hands created paths to the
//! rotation ring for retention.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::warn;

use super::ring::RotationRing;

/// Writes newline-terminated lines to a sequence of rotating log files.
///
/// A file is rolled once its line count strictly exceeds `max_lines`, so a
/// file can hold up to `max_lines + 1` lines before the next write replaces
/// it. File names embed the creation time at second resolution plus a
/// process-lifetime counter that keeps names unique within the same second:
/// `YYYY-MM-DD_HH-MM-SS_<counter>.log`.
#[derive(Debug)]
pub struct RotatingFileWriter {
    folder: PathBuf,
    max_lines: usize,
    lines_in_file: usize,
    file_counter: u64,
    file: Option<File>,
    ring: RotationRing,
}

impl RotatingFileWriter {
    /// Create a writer that logs into `folder`, rolling after the line
    /// count exceeds `max_lines` and retaining at most `max_files` files.
    ///
    /// The folder is expected to exist; a missing folder fails each
    /// rotation attempt until it appears.
    pub fn new(folder: impl Into<PathBuf>, max_lines: usize, max_files: usize) -> Self {
        Self {
            folder: folder.into(),
            max_lines,
            lines_in_file: 0,
            file_counter: 0,
            file: None,
            ring: RotationRing::new(max_files),
        }
    }

    /// Append one newline-terminated line to the current log file, rolling
    /// to a new file first when the previous one is over the threshold.
    ///
    /// Returns an error only when a new file could not be created; the next
    /// call retries the creation. A failed write to an already-open file is
    /// reported as a diagnostic and the file stays open for the next line.
    pub fn append(&mut self, line: &str) -> Result<()> {
        self.roll_if_needed()?;
        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.write_all(line.as_bytes()) {
                warn!("failed to write to log file: {e}");
            }
            // Counts attempted writes, not successful ones.
            self.lines_in_file += 1;
        }
        Ok(())
    }

    /// Whether a log file is currently open.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Close the current log file if one is open. Idempotent.
    pub fn close(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = file.sync_all() {
                warn!("failed to flush log file on close: {e}");
            }
        }
    }

    /// Close an over-threshold file and open a fresh one when needed.
    fn roll_if_needed(&mut self) -> Result<()> {
        if self.lines_in_file > self.max_lines && self.file.is_some() {
            self.close();
        }
        if self.file.is_none() {
            let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
            let name = format!("{stamp}_{}.log", self.file_counter);
            self.file_counter += 1;
            let path = self.folder.join(name);
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            self.lines_in_file = 0;
            self.file = Some(file);
            if let Err(e) = self.ring.record_and_evict(path) {
                warn!("failed to evict rotated log file: {e}");
            }
        }
        Ok(())
    }
}
