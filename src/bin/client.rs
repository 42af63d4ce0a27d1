//! Client binary: download the server's stream into a local file.

use filecast::client;
use filecast::config::{self, ClientArgs};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: ClientArgs = config::parse_or_exit();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match client::download(&args.host, args.port, &args.output, args.chunk_size) {
        Ok(report) => println!("Transfer complete. {report}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
