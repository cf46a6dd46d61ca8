//! Shared utilities for integration and load testing.

#![allow(dead_code)]

use std::io::Read;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use flate2::read::GzDecoder;
use futures_util::future::BoxFuture;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use index_tracker::config::Comparison;
use index_tracker::patches::{PatchSource, ResolveError};
use index_tracker::{HttpServer, Shutdown, TrackerConfig};

/// Create a patch directory holding `(name, content)` files.
pub fn patch_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

/// Concatenation of the `wanted` files in the directory's own listing order.
pub fn listing_concat(dir: &Path, wanted: &[&str]) -> Vec<u8> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().into_string().unwrap();
        if wanted.contains(&name.as_str()) {
            out.extend(std::fs::read(entry.path()).unwrap());
        }
    }
    out
}

/// Config serving `dir` on an ephemeral loopback port.
pub fn config_for(dir: &Path, comparison: Comparison) -> TrackerConfig {
    let mut config = TrackerConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.patches.directory = dir.to_path_buf();
    config.patches.comparison = comparison;
    config
}

/// A running server, stopped on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server for `config` resolving from its patch directory.
pub async fn start_server(config: TrackerConfig) -> TestServer {
    serve(HttpServer::new(config)).await
}

/// Start a server backed by a custom patch source.
pub async fn start_server_with_source(
    config: TrackerConfig,
    source: Arc<dyn PatchSource>,
) -> TestServer {
    serve(HttpServer::with_source(config, source)).await
}

async fn serve(server: HttpServer) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer { addr, shutdown }
}

/// Client that neither pools connections nor goes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

pub fn gunzip(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(bytes).read_to_end(&mut out).unwrap();
    out
}

/// A source that never finishes on its own; records when it is cancelled.
#[derive(Default)]
pub struct StallingSource {
    pub cancelled: Arc<AtomicBool>,
}

impl PatchSource for StallingSource {
    fn load(
        &self,
        _timestamp: u64,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<Bytes, ResolveError>> {
        let cancelled = self.cancelled.clone();
        Box::pin(async move {
            cancel.cancelled().await;
            cancelled.store(true, Ordering::SeqCst);
            Err(ResolveError::Cancelled)
        })
    }
}
