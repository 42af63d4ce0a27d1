//! End-to-end transfer tests: a real server task and the blocking client
//! exercised over loopback.
//!
//! The client is intentionally run on blocking threads
//! (`spawn_blocking` / plain threads) because that is how it runs in
//! production; only the server side lives on the runtime.

use filecast::client;
use filecast::error::Error;
use filecast::server::Server;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

async fn start_server(source: &Path, chunk_size: usize) -> SocketAddr {
    let server = Server::bind("127.0.0.1:0".parse().unwrap(), source, chunk_size)
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(async move { server.run().await });
    addr
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_single_client_receives_exact_content() {
    // 20000 bytes at chunk size 8192: two full chunks and a 3616-byte tail.
    let content = patterned(20000);
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.bin");
    std::fs::write(&source, &content).unwrap();

    let addr = start_server(&source, 8192).await;

    let output = dir.path().join("out.bin");
    let out = output.clone();
    let report = tokio::task::spawn_blocking(move || {
        client::download("127.0.0.1", addr.port(), &out, 8192)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(report.bytes, 20000);
    assert_eq!(std::fs::read(&output).unwrap(), content);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_empty_file_completes_with_zero_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("empty.bin");
    std::fs::write(&source, b"").unwrap();

    let addr = start_server(&source, 8192).await;

    let output = dir.path().join("out.bin");
    let out = output.clone();
    let report = tokio::task::spawn_blocking(move || {
        client::download("127.0.0.1", addr.port(), &out, 8192)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(report.bytes, 0);
    assert_eq!(std::fs::read(&output).unwrap().len(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_clients_each_receive_full_content() {
    let content = patterned(1024 * 1024);
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.bin");
    std::fs::write(&source, &content).unwrap();

    let addr = start_server(&source, 8192).await;

    // Mismatched client chunk sizes on purpose; chunking is not part of the
    // wire contract.
    let mut downloads = Vec::new();
    for (i, chunk_size) in [8192usize, 4096].into_iter().enumerate() {
        let out = dir.path().join(format!("out-{i}.bin"));
        downloads.push((
            out.clone(),
            tokio::task::spawn_blocking(move || {
                client::download("127.0.0.1", addr.port(), &out, chunk_size)
            }),
        ));
    }

    for (out, task) in downloads {
        let report = task.await.unwrap().unwrap();
        assert_eq!(report.bytes, 1024 * 1024);
        assert_eq!(std::fs::read(&out).unwrap(), content);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_peer_reset_is_an_error_not_truncated_success() {
    // Stand-in for a server killed mid-transfer: write part of the stream,
    // then close abortively so the peer sees a reset instead of a clean EOF.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        stream.write_all(&[7u8; 1000]).await.unwrap();
        stream.set_linger(Some(Duration::ZERO)).unwrap();
        drop(stream);
    });

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.bin");
    let result = tokio::task::spawn_blocking(move || {
        client::download("127.0.0.1", addr.port(), &output, 256)
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(Error::Read(_))));
}
