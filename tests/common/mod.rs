//! Shared utilities for integration tests.

use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

use landing::config::{parse_config, ConfigFormat};
use landing::lifecycle::prepare;
use landing::{HttpServer, Shutdown};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A landing server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
    /// Holds the resources directory alive for the server's lifetime.
    pub _resources: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server from a YAML document, with `resources` written into a
/// throwaway resources directory.
pub async fn start_server(config_yaml: &str, resources: &[(&str, &str)]) -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in resources {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    let mut config = parse_config(config_yaml, ConfigFormat::Yaml).unwrap();
    config.server.resources_dir = dir.path().to_string_lossy().into_owned();

    let prepared = prepare(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(prepared.server, prepared.view, prepared.renderer);
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        shutdown,
        handle,
        _resources: dir,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
