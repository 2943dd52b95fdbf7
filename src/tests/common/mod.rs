// tests/common/mod.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::routing::post;
use axum::{Form, Json, Router};
use serde_json::{json, Value};

use crate::client::credentials::Credentials;
use crate::client::token::OAuthResponse;

pub const INITIAL_ACCESS_TOKEN: &str = "InitialAccess0001";
pub const REFRESHED_ACCESS_TOKEN: &str = "RefreshedAccess0002";

/// Credentials that pass every precondition, pointed at `token_url`
pub fn valid_credentials(token_url: &str) -> Credentials {
    Credentials {
        client_id: "ClientIdValue123".to_owned(),
        client_secret: "ClientSecretValue123".to_owned(),
        api_token_url: token_url.to_owned(),
        api_host: "api.example.com".to_owned(),
        api_scheme: "https".to_owned(),
        grant_type: "password".to_owned(),
        username: "tester@example.com".to_owned(),
        password: "pass123".to_owned(),
        extra_headers: HashMap::new(),
    }
}

/// Token endpoint body that satisfies the client postconditions
pub fn oauth_response(access_token: &str, expires_in: i64) -> OAuthResponse {
    OAuthResponse {
        scope: "read write introspection".to_owned(),
        expires_in,
        access_token: access_token.to_owned(),
        refresh_token: "RefreshToken0123456789".to_owned(),
        token_type: "Bearer".to_owned(),
    }
}

pub fn oauth_json(access_token: &str, expires_in: i64) -> Value {
    json!(oauth_response(access_token, expires_in))
}

/// Number of token endpoint calls, split by grant type
#[derive(Clone, Default)]
pub struct GrantCounters {
    pub password: Arc<AtomicUsize>,
    pub refresh: Arc<AtomicUsize>,
}

impl GrantCounters {
    pub fn password(&self) -> usize {
        self.password.load(Ordering::SeqCst)
    }

    pub fn refresh(&self) -> usize {
        self.refresh.load(Ordering::SeqCst)
    }
}

/// Token endpoint at `/oauth2/token/` that hands out a different access token
/// per grant type and counts the calls.
pub fn token_router(counters: GrantCounters) -> Router {
    Router::new().route(
        "/oauth2/token/",
        post(move |Form(form): Form<HashMap<String, String>>| {
            let counters = counters.clone();
            async move {
                let access_token = match form.get("grant_type").map(String::as_str) {
                    Some("refresh_token") => {
                        counters.refresh.fetch_add(1, Ordering::SeqCst);
                        REFRESHED_ACCESS_TOKEN
                    }
                    _ => {
                        counters.password.fetch_add(1, Ordering::SeqCst);
                        INITIAL_ACCESS_TOKEN
                    }
                };
                Json(oauth_json(access_token, 3600))
            }
        }),
    )
}
