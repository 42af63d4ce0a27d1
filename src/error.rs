//! Error taxonomy for the transfer pipeline.
//!
//! Server-side errors are confined to the one session that produced them and
//! never affect the listener or sibling sessions; client-side errors
//! terminate the whole run, since the client has exactly one job.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while setting up or driving a transfer.
#[derive(Debug)]
pub enum Error {
    /// Binding the listening socket failed. Fatal to the server process.
    Bind(SocketAddr, io::Error),
    /// A local file could not be opened for reading or writing.
    FileOpen(PathBuf, io::Error),
    /// Resolving or connecting to the server failed. Fatal to the client run.
    Connect(String, io::Error),
    /// A socket read failed mid-transfer.
    Read(io::Error),
    /// A socket write failed mid-transfer.
    Write(io::Error),
    /// A local file read or write failed mid-transfer.
    FileIo(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Bind(addr, e) => write!(f, "failed to bind {addr}: {e}"),
            Error::FileOpen(path, e) => {
                write!(f, "failed to open file '{}': {}", path.display(), e)
            }
            Error::Connect(addr, e) => write!(f, "failed to connect to {addr}: {e}"),
            Error::Read(e) => write!(f, "read error: {e}"),
            Error::Write(e) => write!(f, "write error: {e}"),
            Error::FileIo(e) => write!(f, "file I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Bind(_, e)
            | Error::FileOpen(_, e)
            | Error::Connect(_, e)
            | Error::Read(e)
            | Error::Write(e)
            | Error::FileIo(e) => Some(e),
        }
    }
}
