use std::sync::Arc;

use axum::routing::get;
use axum::{extract::State, response::IntoResponse, Router};
use http::{header::CONTENT_TYPE, StatusCode};
use prometheus::{Encoder, Registry, TextEncoder};
use tracing::error;

#[derive(Clone)]
pub struct MetricsState {
    pub registry: Arc<Registry>,
}

impl MetricsState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Router serving the registry in the Prometheus text format at `path`.
    pub fn router(self, path: &str) -> Router {
        Router::new()
            .route(path, get(get_metrics))
            .with_state(self)
    }
}

async fn get_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = state.registry.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!("failed to encode metrics: {}", e);
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response();
    }

    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        buffer,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::http::spawn_axum;
    use crate::observability::metrics::get_metrics;

    #[tokio::test]
    async fn exposes_registry_in_text_format() {
        let metrics = get_metrics().await;
        metrics.isc_tokens_issued.inc();

        let router = MetricsState::new(metrics.registry.clone()).router("/metrics");
        let (handle, addr) = spawn_axum(router).await;

        let body = reqwest::get(format!("http://{}/metrics", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body.contains("serviceutils_isc_tokens_issued_total"));
        handle.abort();
    }
}
