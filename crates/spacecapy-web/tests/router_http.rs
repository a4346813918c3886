//! End-to-end checks through the real router and a bound socket.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod support;

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use spacecapy_web::app_state::AppState;
use spacecapy_web::router;

use support::memory_state;

async fn serve(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router::build_router(state)).await.unwrap();
    });
    addr
}

async fn get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn index_then_metrics_over_http() {
    let (state, _) = memory_state(&["http://x/y.png"], 5);
    let addr = serve(state).await;

    let page = get(addr, "/").await;
    assert!(page.starts_with("HTTP/1.1 200"));
    assert!(page.to_ascii_lowercase().contains("content-type: text/html"));
    assert!(page.contains("http://x/y.png"));
    assert!(page.contains("Visitors: 6<"));

    let metrics = get(addr, "/metrics").await;
    assert!(metrics.starts_with("HTTP/1.1 200"));
    assert!(metrics.contains("text/plain; version=0.0.4"));
    assert!(metrics.contains("space_capybara_visitors_total 6"));
    assert!(metrics.contains(r#"spacecapy_http_requests_total{route="/",status="200"} 1"#));
}

#[tokio::test]
async fn healthz_and_unknown_route() {
    let (state, _) = memory_state(&[], 0);
    let addr = serve(state).await;

    let health = get(addr, "/healthz").await;
    assert!(health.starts_with("HTTP/1.1 200"));
    assert!(health.ends_with("ok"));

    let missing = get(addr, "/nope").await;
    assert!(missing.starts_with("HTTP/1.1 404"));
}
