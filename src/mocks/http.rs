use std::net::SocketAddr;

use anyhow::Result;
use axum::routing::any;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::StatusCode;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::error;

use crate::utils::constants::JSON_CONTENT_TYPE;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!("mock server failed: {}", e);
        }
    });
    (handle, addr)
}

/// Router answering every method on `path` with a fixed status, content type and body.
pub fn static_router(path: &str, status: StatusCode, content_type: &'static str, body: String) -> Router {
    Router::new().route(
        path,
        any(move || {
            let body = body.clone();
            async move { (status, [(CONTENT_TYPE, content_type)], body) }
        }),
    )
}

/// Router answering every method on `path` with a JSON body.
pub fn json_router(path: &str, status: StatusCode, body: Value) -> Result<Router> {
    Ok(static_router(path, status, JSON_CONTENT_TYPE, serde_json::to_string(&body)?))
}
