//! Signal-triggered shutdown
//!
//! Turns SIGINT/SIGTERM into logged notices and a bounded-delay forced
//! exit, independent of the line pump.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal::unix::{signal, SignalKind};

use crate::logging::Logger;

/// Wait for a termination signal, then force the process down after
/// `grace`.
///
/// The received signal is logged through `logger` immediately; the grace
/// delay then gives the upstream command time to finish draining the pipe.
/// If the process is still alive when the delay elapses, a final notice is
/// logged, the log file is closed, and the process exits unconditionally.
/// The pump is not cancelled cooperatively - when it wins the race the
/// process exits normally and this task dies with it.
pub async fn watch(logger: Arc<Logger>, grace: Duration) -> Result<()> {
    let mut interrupt =
        signal(SignalKind::interrupt()).context("failed to install SIGINT handler")?;
    let mut terminate =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };

    logger.write_line(&format!("logger: received signal: {name}\n"));
    tokio::time::sleep(grace).await;
    logger.write_line(&format!(
        "logger: command not terminated after {grace:?}, forcing exit\n"
    ));
    logger.close();
    std::process::exit(0);
}
