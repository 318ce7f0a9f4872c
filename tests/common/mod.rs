//! Shared utilities for integration tests.

use std::net::SocketAddr;

use kitty::{KittyConfig, Server, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn `server` on 127.0.0.1 with a random port.
    pub async fn spawn(server: Server) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();

        let handle = tokio::spawn(async move {
            server.run(listener, rx).await.unwrap();
        });

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Send `method path` and return the status and body.
    pub async fn request(&self, method: &str, path: &str) -> (u16, String) {
        let client = client();
        let method = reqwest::Method::from_bytes(method.as_bytes()).unwrap();
        let res = client
            .request(method, self.url(path))
            .send()
            .await
            .expect("server unreachable");
        let status = res.status().as_u16();
        (status, res.text().await.unwrap())
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle.await.unwrap();
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn config() -> KittyConfig {
    let mut config = KittyConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config
}
