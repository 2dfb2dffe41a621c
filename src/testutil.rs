//! Loopback HTTP stub for probe tests.
//!
//! `HEAD /status/<code>` answers with that status code. `HEAD /hang`
//! accepts the connection and never replies. Any other method gets 405.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub struct StubServer {
    base: String,
}

impl StubServer {
    pub fn status_url(&self, code: u16) -> String {
        format!("{}/status/{}", self.base, code)
    }

    pub fn hang_url(&self) -> String {
        format!("{}/hang", self.base)
    }
}

/// Starts the stub on an ephemeral port. It lives until the test runtime stops.
pub async fn start_stub_server() -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("local addr").port();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(handle(stream));
        }
    });

    StubServer {
        base: format!("http://127.0.0.1:{}", port),
    }
}

/// A URL on a port nothing listens on, so connecting is refused.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

async fn handle(mut stream: TcpStream) {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    // Read until the end of the request headers
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let request = String::from_utf8_lossy(&buf);
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");
    let path = target.split('?').next().unwrap_or(target);

    if !method.eq_ignore_ascii_case("HEAD") {
        let _ = stream.write_all(response(405).as_bytes()).await;
        return;
    }

    if path == "/hang" {
        tokio::time::sleep(Duration::from_secs(60)).await;
        return;
    }

    let code = path
        .strip_prefix("/status/")
        .and_then(|c| c.parse::<u16>().ok())
        .unwrap_or(404);
    let _ = stream.write_all(response(code).as_bytes()).await;
}

fn response(code: u16) -> String {
    format!(
        "HTTP/1.1 {} Stub\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        code
    )
}
