//! End-to-end tests against a live listener
//!
//! Each test binds an ephemeral port, serves a temporary bundle directory,
//! and drives the server over raw TCP.

use nexus_backend::config::{Config, HealthConfig, LoggingConfig, ServerConfig, StaticFilesConfig};
use nexus_backend::server;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const INDEX_HTML: &[u8] = b"<html><body>NexusMind</body></html>";
const STYLE_CSS: &[u8] = b"body { margin: 0; }";

fn bundle_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.path().join("style.css"), STYLE_CSS).unwrap();
    dir
}

fn test_config(root: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: None,
        },
        static_files: StaticFilesConfig {
            root: root.to_string(),
            index_file: "index.html".to_string(),
        },
        health: HealthConfig::default(),
        logging: LoggingConfig {
            access_log: false,
            access_log_format: "common".to_string(),
            access_log_file: None,
            error_log_file: None,
        },
    }
}

async fn start_server(root: &str) -> SocketAddr {
    let config = test_config(root);
    let listener = server::bind("127.0.0.1:0".parse().unwrap()).expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(server::serve(listener, Arc::new(config)));
    addr
}

/// Issue one request and return (status, raw header block, body bytes)
async fn request(addr: SocketAddr, method: &str, path: &str) -> (u16, String, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let req = format!("{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.expect("send request");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read response");

    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header/body separator");
    let head = String::from_utf8_lossy(&raw[..split]).to_string();
    let body = raw[split + 4..].to_vec();

    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse().ok())
        .expect("status code");

    (status, head, body)
}

#[tokio::test]
async fn health_check_returns_fixed_json() {
    let dir = bundle_dir();
    let addr = start_server(dir.path().to_str().unwrap()).await;

    let (status, head, body) = request(addr, "GET", "/api/health").await;
    assert_eq!(status, 200);
    assert!(head.to_lowercase().contains("content-type: application/json"));
    assert_eq!(body, br#"{"status":"ok","message":"Nexus Backend is healthy"}"#);
}

#[tokio::test]
async fn static_asset_is_served_verbatim() {
    let dir = bundle_dir();
    let addr = start_server(dir.path().to_str().unwrap()).await;

    let (status, head, body) = request(addr, "GET", "/style.css").await;
    assert_eq!(status, 200);
    assert!(head.to_lowercase().contains("content-type: text/css"));
    assert_eq!(body, STYLE_CSS);
}

#[tokio::test]
async fn unmatched_route_gets_entry_document() {
    let dir = bundle_dir();
    let addr = start_server(dir.path().to_str().unwrap()).await;

    let (status, _, body) = request(addr, "GET", "/does-not-exist").await;
    assert_eq!(status, 200);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn root_gets_entry_document() {
    let dir = bundle_dir();
    let addr = start_server(dir.path().to_str().unwrap()).await;

    let (status, head, body) = request(addr, "GET", "/").await;
    assert_eq!(status, 200);
    assert!(head.to_lowercase().contains("content-type: text/html"));
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn head_request_sends_headers_only() {
    let dir = bundle_dir();
    let addr = start_server(dir.path().to_str().unwrap()).await;

    let (status, head, body) = request(addr, "HEAD", "/style.css").await;
    assert_eq!(status, 200);
    assert!(head
        .to_lowercase()
        .contains(&format!("content-length: {}", STYLE_CSS.len())));
    assert!(body.is_empty());
}

#[tokio::test]
async fn post_is_method_not_allowed() {
    let dir = bundle_dir();
    let addr = start_server(dir.path().to_str().unwrap()).await;

    let (status, head, _) = request(addr, "POST", "/api/health").await;
    assert_eq!(status, 405);
    assert!(head.to_lowercase().contains("allow: get, head, options"));
}

#[tokio::test]
async fn second_bind_on_same_port_fails() {
    let dir = bundle_dir();
    let addr = start_server(dir.path().to_str().unwrap()).await;

    assert!(server::bind(addr).is_err());
}
