//! Blocking downloader: connect, drain the socket to end-of-stream, append
//! to a local file, and time the whole operation.
//!
//! The client serves exactly one transfer, so a single blocking control flow
//! is all it needs: every socket read and every file write blocks until it
//! completes.

use crate::error::{Error, Result};
use crate::report::TransferReport;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Download the server's stream into `output`, returning the byte count and
/// elapsed time on success.
///
/// The output file is created first, so an unwritable path fails before any
/// network activity. The stream ends when the server closes the connection
/// gracefully; any other read failure surfaces as an error, never as a
/// silently truncated success. A partially written output file is left on
/// disk for inspection.
pub fn download(host: &str, port: u16, output: &Path, chunk_size: usize) -> Result<TransferReport> {
    let mut file = File::create(output).map_err(|e| Error::FileOpen(output.to_path_buf(), e))?;

    info!(host, port, "connecting");
    let mut stream = TcpStream::connect((host, port))
        .map_err(|e| Error::Connect(format!("{host}:{port}"), e))?;
    info!("connected, transferring");

    let started = Instant::now();
    let mut buf = vec![0u8; chunk_size];
    let mut total: u64 = 0;

    loop {
        match stream.read(&mut buf) {
            // Graceful end-of-stream: the sender closed after flushing.
            Ok(0) => break,
            Ok(n) => {
                file.write_all(&buf[..n]).map_err(Error::FileIo)?;
                total += n as u64;
            }
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Read(e)),
        }
    }

    Ok(TransferReport::new(total, started.elapsed()))
}
