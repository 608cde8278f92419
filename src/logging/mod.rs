//! Rotating file logging
//!
//! Provides the fixed-capacity rotation ring, the rotating file writer,
//! and the synchronized logger shared by the line pump and the shutdown
//! watcher.

mod logger;
mod ring;
mod writer;

pub use logger::Logger;
pub use ring::RotationRing;
pub use writer::RotatingFileWriter;
