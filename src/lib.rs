//! filecast: stream a single file over raw TCP to any number of clients.
//!
//! Two programs share one implicit protocol: connect, then move the raw
//! bytes of one file until the sender closes the connection. There is no
//! negotiation, no framing, and no trailer; end-of-stream is the close.
//!
//! - Server: an accept loop spawning one detached transfer session per
//!   client, driven by a fixed pool of worker threads sharing one reactor.
//! - Client: a single blocking control flow that drains the socket to
//!   end-of-stream and reports throughput.

pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod runtime;
pub mod server;
