//! Loopback HTTP helpers shared by the maps client tests.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Read a request up to the blank line ending its head.
pub async fn read_head(stream: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !buffer.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await.expect("read request");
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write a JSON response with `status` and close the connection.
pub async fn respond(stream: &mut TcpStream, status: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    stream
        .write_all(response.as_bytes())
        .await
        .expect("write response");
    stream.shutdown().await.ok();
}

/// A loopback maps service answering every request with the same response.
///
/// Request lines are recorded in arrival order. The accept loop runs on the
/// runtime that started it and stops when that runtime shuts down.
#[derive(Debug)]
pub struct MapsService {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MapsService {
    pub async fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    let head = read_head(&mut stream).await;
                    let line = head.lines().next().unwrap_or_default().to_owned();
                    log.lock().expect("request log").push(line);
                    respond(&mut stream, status, body).await;
                });
            }
        });
        Self {
            base_url: format!("http://{addr}/maps/api"),
            requests,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request lines of every directions call received so far.
    pub fn directions_requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request log")
            .iter()
            .filter(|line| line.starts_with("GET /maps/api/directions/json?"))
            .cloned()
            .collect()
    }
}
