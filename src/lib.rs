//! logtee - pipe tee with rotating, count-bounded log files
//!
//! This library provides the core functionality for the logtee binary: the
//! synchronized logger over rotating files, the line pump that feeds it,
//! and the signal-driven shutdown path.

pub mod cli;
pub mod logging;
pub mod pump;
pub mod shutdown;
