//! Server binary: stream one file to every connecting client.

use filecast::config::{self, ServerArgs};
use filecast::runtime;
use filecast::server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: ServerArgs = config::parse_or_exit();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let workers = runtime::worker_count(args.workers);
    info!(
        addr = %args.listen_addr(),
        file = %args.file.display(),
        workers,
        chunk_size = args.chunk_size,
        "starting filecast server"
    );

    if let Err(e) = serve(&args, workers) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn serve(args: &ServerArgs, workers: usize) -> Result<(), Box<dyn std::error::Error>> {
    let rt = runtime::build(workers)?;
    rt.block_on(async {
        let server = Server::bind(args.listen_addr(), args.file.clone(), args.chunk_size).await?;
        let addr = server.local_addr()?;
        info!(%addr, "server listening");
        server.run().await;
        Ok(())
    })
}
