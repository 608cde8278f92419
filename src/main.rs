use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use logtee::cli::Cli;
use logtee::logging::{Logger, RotatingFileWriter};
use logtee::{pump, shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr, separate from the mirrored stream;
    // RUST_LOG overrides the default filter.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "logtee=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if !cli.folder.is_dir() {
        tracing::warn!(
            "log folder {} does not exist; lines are mirrored but not persisted until it does",
            cli.folder.display()
        );
    }

    let writer = RotatingFileWriter::new(cli.folder.clone(), cli.lines, cli.files);
    let logger = Arc::new(Logger::new(writer, cli.mirror_stream()));

    // The watcher races the pump: on SIGINT/SIGTERM it logs a notice and
    // forces the process down after the grace delay.
    let signal_logger = Arc::clone(&logger);
    let grace = cli.grace_delay();
    tokio::spawn(async move {
        if let Err(e) = shutdown::watch(signal_logger, grace).await {
            tracing::error!("signal handling unavailable: {e:#}");
        }
    });

    pump::run(tokio::io::stdin(), &logger).await;
    Ok(())
}
