//! Command-line interface
//!
//! logtee sits at the end of a pipe (`command 2>&1 | logtee`): everything
//! it reads is mirrored to a terminal stream and persisted into rotating
//! log files.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Mirror piped output while persisting it into rotating log files.
#[derive(Debug, Parser)]
#[command(name = "logtee")]
#[command(about = "Tee a command's piped output into rotating, count-bounded log files")]
pub struct Cli {
    /// Lines written to a log file before rolling over to a new one
    #[arg(long, default_value_t = 1000)]
    pub lines: usize,

    /// Maximum number of log files kept on disk; the oldest is deleted
    /// when a new one would exceed the cap
    #[arg(long, default_value_t = 10)]
    pub files: usize,

    /// Grace delay in milliseconds between a termination signal and the
    /// forced exit
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Directory receiving the log files (must already exist)
    #[arg(long, default_value = ".")]
    pub folder: PathBuf,

    /// Mirror to stdout instead of stderr
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Grace delay as a duration.
    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// The stream mirrored lines are written to.
    pub fn mirror_stream(&self) -> Box<dyn Write + Send> {
        if self.stdout {
            Box::new(io::stdout())
        } else {
            Box::new(io::stderr())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["logtee"]).unwrap();
        assert_eq!(cli.lines, 1000);
        assert_eq!(cli.files, 10);
        assert_eq!(cli.grace_delay(), Duration::from_secs(2));
        assert_eq!(cli.folder, PathBuf::from("."));
        assert!(!cli.stdout);
    }

    #[test]
    fn test_all_flags_parse() {
        let cli = Cli::try_parse_from([
            "logtee",
            "--lines",
            "25",
            "--files",
            "3",
            "--delay-ms",
            "500",
            "--folder",
            "/var/log/wrapped",
            "--stdout",
        ])
        .unwrap();
        assert_eq!(cli.lines, 25);
        assert_eq!(cli.files, 3);
        assert_eq!(cli.grace_delay(), Duration::from_millis(500));
        assert_eq!(cli.folder, PathBuf::from("/var/log/wrapped"));
        assert!(cli.stdout);
    }
}
