//! Worker pool construction for the server.
//!
//! The server's parallelism is a fixed pool of worker threads all driving one
//! shared scheduler/reactor. A pending socket write suspends only the session
//! that issued it; the worker moves on to whatever completion is ready next,
//! so no single transfer ever blocks another. A session that panics takes
//! down only its own task; the pool keeps servicing the rest.

use std::io;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tokio::runtime::Runtime;

/// Resolve the worker count: a configured nonzero value wins, otherwise the
/// hardware parallelism of the host (minimum one).
pub fn worker_count(configured: Option<usize>) -> usize {
    match configured {
        Some(n) if n > 0 => n,
        _ => thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1),
    }
}

/// Build a multi-threaded runtime with exactly `workers` worker threads,
/// named `worker-{n}`, with the I/O and time drivers enabled.
pub fn build(workers: usize) -> io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .thread_name_fn(|| {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            format!("worker-{id}")
        })
        .enable_all()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_count_resolution() {
        assert_eq!(worker_count(Some(4)), 4);
        assert!(worker_count(Some(0)) >= 1);
        assert!(worker_count(None) >= 1);
    }

    #[test]
    fn test_build_runtime() {
        let rt = build(2).unwrap();
        let value = rt.block_on(async { 40 + 2 });
        assert_eq!(value, 42);
    }
}
