//! Configuration for the server and client binaries.
//!
//! Both programs are configured entirely on the command line: positional
//! arguments for the required parameters, long flags for the tuning knobs.
//! There is no configuration file and no environment lookup beyond the
//! standard `RUST_LOG` filter override.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::process;

/// Default bytes moved per read/write step.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Command-line arguments for the server
#[derive(Parser, Debug)]
#[command(name = "filecast-server")]
#[command(version = "0.1.0")]
#[command(about = "Stream a single file to every connecting client", long_about = None)]
pub struct ServerArgs {
    /// Port to listen on
    pub port: u16,

    /// File streamed to every client
    pub file: PathBuf,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Bytes moved per read/write step
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Number of worker threads (defaults to number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerArgs {
    /// Address the listening socket is bound to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Command-line arguments for the client
#[derive(Parser, Debug)]
#[command(name = "filecast-client")]
#[command(version = "0.1.0")]
#[command(about = "Download the server's stream into a local file", long_about = None)]
pub struct ClientArgs {
    /// Server host name or address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Path the downloaded stream is written to
    pub output: PathBuf,

    /// Bytes requested per socket read
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_chunk_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("invalid chunk size '{s}'"))?;
    if n == 0 {
        return Err("chunk size must be nonzero".to_string());
    }
    Ok(n)
}

/// Parse arguments, printing the usage/error text and exiting with status 1
/// on any mismatch.
pub fn parse_or_exit<A: Parser>() -> A {
    A::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    })
}
