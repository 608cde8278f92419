//! Line pump
//!
//! Drives the logger from an async byte stream: frames newline-terminated
//! records, forwards them, and turns end-of-stream conditions into logged
//! notices.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::logging::Logger;

/// Notice logged when the upstream command closes its end of the pipe.
const EOF_NOTICE: &str = "logger: command terminated with EOF\n";

/// Notice logged when reading the upstream stream fails.
const ERROR_NOTICE: &str = "logger: command terminated with error:\n";

/// Read `input` to completion, forwarding every newline-terminated record
/// to `logger`.
///
/// A trailing record without a final newline is forwarded verbatim. On EOF
/// the EOF notice is logged and the logger closed; on a read error the
/// error notice is logged, followed by each line of the error's
/// description with trailing whitespace trimmed, before closing. Returns
/// exactly once, after the logger has been closed.
pub async fn run<R>(input: R, logger: &Logger)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(input);
    let mut record = Vec::new();
    loop {
        record.clear();
        match reader.read_until(b'\n', &mut record).await {
            Ok(0) => {
                logger.write_line(EOF_NOTICE);
                logger.close();
                return;
            }
            Ok(_) => {
                logger.write_line(&String::from_utf8_lossy(&record));
            }
            Err(e) => {
                logger.write_line(ERROR_NOTICE);
                for line in e.to_string().lines() {
                    logger.write_line(&format!("{}\n", line.trim_end()));
                }
                logger.close();
                return;
            }
        }
    }
}
