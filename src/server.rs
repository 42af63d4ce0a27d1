//! TCP server that streams one file to every connecting client.
//!
//! The listener accepts indefinitely; each accepted connection gets its own
//! session with an independent read handle on the source file, spawned as a
//! detached task. Accept and transfer are fully decoupled: a slow client
//! never delays the accept loop, and one session's failure never affects the
//! listener or its siblings.

use crate::error::{Error, Result};
use crate::report::TransferReport;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info};

/// Server instance owning the bound listener.
pub struct Server {
    listener: TcpListener,
    source: PathBuf,
    chunk_size: usize,
}

impl Server {
    /// Bind the listening socket.
    pub async fn bind(
        addr: SocketAddr,
        source: impl Into<PathBuf>,
        chunk_size: usize,
    ) -> Result<Server> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Bind(addr, e))?;
        Ok(Server {
            listener,
            source: source.into(),
            chunk_size,
        })
    }

    /// Address the listener actually bound (port 0 resolves here).
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections forever, spawning one transfer session per client.
    ///
    /// Accept errors are logged and retried indefinitely. A session that
    /// cannot open the source file is logged with peer context and its
    /// connection dropped without sending a byte. Neither terminates the
    /// loop.
    pub async fn run(&self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    info!(peer = %peer, "client connected");
                    match Session::open(stream, peer, &self.source, self.chunk_size).await {
                        Ok(session) => {
                            tokio::spawn(session.run());
                        }
                        Err(e) => {
                            error!(peer = %peer, error = %e, "failed to start transfer");
                        }
                    }
                }
                Err(e) => {
                    error!(error = %e, "failed to accept connection");
                }
            }
        }
    }
}

/// One transfer: an independent read cursor on the source file bound to one
/// client connection.
///
/// The spawned task is the session's sole owner. When the task finishes the
/// session, its buffer, and both handles are freed exactly once; nothing else
/// holds the session after the accept handler returns.
struct Session {
    stream: TcpStream,
    peer: SocketAddr,
    file: File,
    buf: Vec<u8>,
    transferred: u64,
    started: Instant,
}

impl Session {
    /// Open a fresh read handle on the source file for this client.
    ///
    /// Fails before any byte hits the wire if the file is missing or
    /// unreadable; concurrent sessions never share a file cursor.
    async fn open(
        stream: TcpStream,
        peer: SocketAddr,
        source: &Path,
        chunk_size: usize,
    ) -> Result<Session> {
        let file = File::open(source)
            .await
            .map_err(|e| Error::FileOpen(source.to_path_buf(), e))?;

        Ok(Session {
            stream,
            peer,
            file,
            buf: vec![0u8; chunk_size],
            transferred: 0,
            started: Instant::now(),
        })
    }

    /// Drive the chunk loop to completion and log the outcome.
    async fn run(mut self) {
        debug!(peer = %self.peer, "starting file transfer");
        match self.stream_chunks().await {
            Ok(()) => {
                let report = TransferReport::new(self.transferred, self.started.elapsed());
                info!(peer = %self.peer, %report, "transfer complete");
            }
            Err(e) => {
                // No retry; dropping the stream tears the connection down.
                error!(
                    peer = %self.peer,
                    bytes = self.transferred,
                    error = %e,
                    "transfer aborted"
                );
            }
        }
    }

    /// Chunk loop: read up to one buffer from the file, write exactly the
    /// bytes read to the socket, repeat until end-of-file.
    ///
    /// Chunk N+1 is not read until chunk N's write has completed, so the
    /// counter only ever reflects confirmed completions and the file cursor
    /// advances monotonically. The await points are where other sessions'
    /// completions get serviced.
    async fn stream_chunks(&mut self) -> Result<()> {
        loop {
            let n = self.file.read(&mut self.buf).await.map_err(Error::FileIo)?;
            if n == 0 {
                break;
            }
            self.stream
                .write_all(&self.buf[..n])
                .await
                .map_err(Error::Write)?;
            self.transferred += n as u64;
        }

        // Graceful end-of-stream: flush and close the write half so the peer
        // observes EOF rather than a reset. The stream itself is the only
        // protocol; there is no trailer to send.
        self.stream.shutdown().await.map_err(Error::Write)?;
        Ok(())
    }
}
