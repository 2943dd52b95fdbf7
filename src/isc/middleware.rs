use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::StatusCode;
use tracing::{debug, warn};

use crate::isc::validator::has_valid_jwt_bearer_token;
use crate::observability::metrics::get_metrics;
use crate::server::response::{respond_with_error, respond_with_json, ERROR_KEY};

/// Shared signing key for `require_inter_service_token`
#[derive(Clone)]
pub struct InterServiceAuth {
    key: Arc<Vec<u8>>,
}

impl InterServiceAuth {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: Arc::new(key.into()) }
    }
}

/// Reject requests without a valid inter-service bearer token.
///
/// ```ignore
/// let app = Router::new()
///     .route("/internal", post(handler))
///     .layer(axum::middleware::from_fn_with_state(auth, require_inter_service_token));
/// ```
pub async fn require_inter_service_token(
    State(auth): State<InterServiceAuth>,
    mut request: Request,
    next: Next,
) -> Response {
    let metrics = get_metrics().await;
    let (valid, err, claims) = has_valid_jwt_bearer_token(request.headers(), &auth.key);

    match (valid, claims) {
        (true, Some(claims)) => {
            metrics.isc_validations.with_label_values(&["success"]).inc();
            debug!(service = %claims.service_name, "inter-service token accepted");
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        _ => {
            metrics.isc_validations.with_label_values(&["failure"]).inc();
            let err = err.unwrap_or_default();
            warn!(
                "inter-service token rejected: {}",
                err.get(ERROR_KEY).map(String::as_str).unwrap_or("unknown")
            );
            match serde_json::to_vec(&err) {
                Ok(payload) => respond_with_json(StatusCode::UNAUTHORIZED, payload),
                Err(e) => respond_with_error(StatusCode::UNAUTHORIZED, e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isc::claims::Claims;
    use crate::mocks::http::spawn_axum;
    use axum::routing::get;
    use axum::{Extension, Router};
    use serde_json::Value;

    const KEY: &[u8] = b"an open secret";

    fn guarded_router() -> Router {
        Router::new()
            .route(
                "/internal",
                get(|Extension(claims): Extension<Claims>| async move { claims.service_name }),
            )
            .layer(axum::middleware::from_fn_with_state(
                InterServiceAuth::new(KEY),
                require_inter_service_token,
            ))
    }

    #[tokio::test]
    async fn rejects_missing_token_without_calling_handler() {
        let (handle, addr) = spawn_axum(guarded_router()).await;

        let res = reqwest::get(format!("http://{}/internal", addr)).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "expected an `Authorization` request header");
        handle.abort();
    }

    #[tokio::test]
    async fn rejects_token_signed_with_another_key() {
        let (handle, addr) = spawn_axum(guarded_router()).await;
        let token = Claims::issued_now("otp", 5).unwrap().sign(b"not our key").unwrap();

        let res = reqwest::Client::new()
            .get(format!("http://{}/internal", addr))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "signature is invalid");
        handle.abort();
    }

    #[tokio::test]
    async fn passes_valid_token_and_claims_through() {
        let (handle, addr) = spawn_axum(guarded_router()).await;
        let token = Claims::issued_now("otp", 5).unwrap().sign(KEY).unwrap();

        let res = reqwest::Client::new()
            .get(format!("http://{}/internal", addr))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), "otp");
        handle.abort();
    }
}
