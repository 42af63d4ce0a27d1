//! Throughput reporting shared by server and client.
//!
//! Both sides use the same formula and the same fractional-second precision,
//! so a server log line and a client summary for the same transfer agree.

use std::fmt;
use std::time::Duration;

const BYTES_PER_MB: f64 = (1024 * 1024) as f64;

/// Summary of one completed transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferReport {
    /// Total bytes confirmed on the wire.
    pub bytes: u64,
    /// Wall-clock duration of the transfer.
    pub elapsed: Duration,
}

impl TransferReport {
    pub fn new(bytes: u64, elapsed: Duration) -> Self {
        Self { bytes, elapsed }
    }

    /// Transfer rate in MB/s.
    ///
    /// An instantaneous transfer (empty file, sub-tick clock) reports 0
    /// rather than dividing by zero.
    pub fn megabytes_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.bytes as f64 / BYTES_PER_MB) / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes in {:.2} secs ({:.2} MB/s)",
            self.bytes,
            self.elapsed.as_secs_f64(),
            self.megabytes_per_sec()
        )
    }
}
