#![cfg(test)]

use crate::github::types::RawRepository;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub fn make_repo(name: &str, topics: &[&str], stars: u64) -> RawRepository {
    RawRepository {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        html_url: format!("https://github.com/someone/{name}"),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        stargazers_count: stars,
    }
}

pub struct TestServer {
    pub base_url: String,
    request: oneshot::Receiver<String>,
}

impl TestServer {
    /// First line of the request the server received.
    pub async fn request_line(self) -> String {
        self.request.await.unwrap_or_default()
    }
}

/// Answers exactly one HTTP request with `status` and a JSON `body`.
pub async fn serve_once(status: &str, body: &str) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut received = Vec::new();
        let mut chunk = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => received.extend_from_slice(&chunk[..n]),
            }
        }
        let head = String::from_utf8_lossy(&received);
        let _ = tx.send(head.lines().next().unwrap_or("").to_string());
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    });

    TestServer {
        base_url: format!("http://{addr}"),
        request: rx,
    }
}
