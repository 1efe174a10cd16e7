//! A minimal HTTP/1.1 server serving fixed responses on loopback.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Size of the slices the body is written in.
pub const WRITE_CHUNK: usize = 1000;

#[derive(Clone)]
struct Route {
    status: u16,
    body: Vec<u8>,
    /// Announced `Content-Length`, which may exceed the body actually sent.
    content_length: usize,
}

impl Route {
    fn new(status: u16, body: Vec<u8>) -> Self {
        let content_length = body.len();
        Self {
            status,
            body,
            content_length,
        }
    }
}

/// Builder for a [`TestServer`].
#[derive(Default)]
pub struct TestServerBuilder {
    routes: HashMap<String, Route>,
}

impl TestServerBuilder {
    /// Serves `body` with a 200 status at `path`.
    pub fn file(mut self, path: &str, body: Vec<u8>) -> Self {
        self.routes.insert(path.to_string(), Route::new(200, body));
        self
    }

    /// Announces `content_length` bytes at `path` but closes the connection
    /// after sending `body`.
    pub fn truncated(mut self, path: &str, body: Vec<u8>, content_length: usize) -> Self {
        assert!(content_length > body.len());
        let mut route = Route::new(200, body);
        route.content_length = content_length;
        self.routes.insert(path.to_string(), route);
        self
    }

    /// Serves an empty response with `status` at `path`.
    pub fn status(mut self, path: &str, status: u16) -> Self {
        self.routes.insert(path.to_string(), Route::new(status, Vec::new()));
        self
    }

    pub async fn start(self) -> TestServer {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local address");
        let routes = Arc::new(self.routes);

        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let _ = serve(socket, &routes).await;
                });
            }
        });

        TestServer { addr }
    }
}

/// Running test server. It lives as long as the test runtime.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    pub fn builder() -> TestServerBuilder {
        TestServerBuilder::default()
    }

    /// Absolute URL of `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn serve(mut socket: TcpStream, routes: &HashMap<String, Route>) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..n]);
    }

    let head = String::from_utf8_lossy(&request);
    let target = head.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split('?').next().unwrap_or(target);

    let route = routes
        .get(path)
        .cloned()
        .unwrap_or_else(|| Route::new(404, Vec::new()));
    let reason = match route.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };

    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason,
        route.content_length
    );
    socket.write_all(header.as_bytes()).await?;
    for chunk in route.body.chunks(WRITE_CHUNK) {
        socket.write_all(chunk).await?;
        socket.flush().await?;
    }
    socket.shutdown().await
}

/// A URL on loopback where nothing listens.
pub async fn unreachable_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}{}", addr, path)
}
