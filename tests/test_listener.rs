//! End-to-end tests over real TCP sockets

mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use common::{config_for, site, INDEX};
use docroot::http::response::{HTTP_200, HTTP_404, HTTP_501};
use docroot::server::listener;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn start(root: &std::path::Path) -> SocketAddr {
    let cfg = config_for(root);
    let listener = listener::bind(&cfg.server.listen_addr).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(listener::serve(listener, Arc::new(cfg)));
    addr
}

async fn request(addr: SocketAddr, req: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(req).await.unwrap();
    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    out
}

#[tokio::test]
async fn test_serves_index_over_tcp() {
    let addr = start(&site("tcp-index")).await;

    let out = request(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let mut expected = HTTP_200.to_vec();
    expected.extend_from_slice(INDEX);
    assert_eq!(out, expected);
}

#[tokio::test]
async fn test_each_connection_gets_one_response() {
    let addr = start(&site("tcp-sequence")).await;

    assert_eq!(request(addr, b"GET /nope.html HTTP/1.0\r\n\r\n").await, HTTP_404);
    assert_eq!(request(addr, b"POST / HTTP/1.0\r\n\r\n").await, HTTP_501);
    assert_eq!(request(addr, b"HEAD / HTTP/1.0\r\n\r\n").await, HTTP_200);
}

#[tokio::test]
async fn test_silent_client_gets_nothing() {
    let addr = start(&site("tcp-silent")).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.shutdown().await.unwrap();
    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    assert!(out.is_empty());

    // the server keeps accepting
    assert_eq!(request(addr, b"HEAD / HTTP/1.1\r\n\r\n").await, HTTP_200);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_do_not_mix() {
    let root = site("tcp-concurrent");
    let files: Vec<(String, Vec<u8>)> = (0..16)
        .map(|i| {
            let name = format!("page{}.html", i);
            let body = format!("<p>page {}</p>", i).repeat(100 * (i + 1));
            (name, body.into_bytes())
        })
        .collect();
    for (name, body) in &files {
        std::fs::write(root.join(name), body).unwrap();
    }
    let addr = start(&root).await;

    let mut handles = Vec::new();
    for (name, body) in files {
        handles.push(tokio::spawn(async move {
            let req = format!("GET /{} HTTP/1.1\r\n\r\n", name);
            let out = request(addr, req.as_bytes()).await;
            let mut expected = HTTP_200.to_vec();
            expected.extend_from_slice(&body);
            assert_eq!(out, expected, "response for {}", name);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}
