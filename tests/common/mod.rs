//! Shared utilities for integration tests.

use std::net::SocketAddr;

use calsum::config::ServerConfig;
use calsum::http::HttpServer;
use calsum::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running service bound to an ephemeral port.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    /// URL of the sum endpoint.
    pub fn url(&self) -> String {
        format!("http://{}/total/", self.addr)
    }

    /// Stop the server.
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Start the real server on 127.0.0.1 with an ephemeral port.
///
/// The listener is bound before the task is spawned, so requests can be
/// sent immediately.
pub async fn start_server(config: ServerConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    TestServer { addr, shutdown }
}

/// Request body that streams `text` in `chunk_size`-byte pieces.
#[allow(dead_code)]
pub fn chunked_body(text: &str, chunk_size: usize) -> reqwest::Body {
    let chunks: Vec<Result<Vec<u8>, std::io::Error>> = text
        .as_bytes()
        .chunks(chunk_size)
        .map(|chunk| Ok(chunk.to_vec()))
        .collect();
    reqwest::Body::wrap_stream(futures_util::stream::iter(chunks))
}
