//! OAuth2 password-grant API client.
//!
//! [`ServerClient`](server_client::ServerClient) authenticates once, keeps
//! the token state in place and refreshes it before expiry on the next
//! request that finds the refresh deadline behind it.

use std::future::Future;

use anyhow::{Context, Result};
use http::Method;
use reqwest::{Body, Response, Url};

pub mod conditions;
pub mod credentials;
pub mod server_client;
pub mod token;

use credentials::Credentials;
use token::TokenState;

/// What an OAuth2 + HTTP API client offers. Mocked in tests.
pub trait ApiClient {
    fn is_initialized(&self) -> bool;

    fn credentials(&self) -> &Credentials;

    fn token(&self) -> &TokenState;

    fn authenticate(&mut self) -> impl Future<Output = Result<()>> + Send;

    fn refresh(&mut self) -> impl Future<Output = Result<()>> + Send;

    fn make_request(
        &mut self,
        method: Method,
        url: &str,
        body: Option<Body>,
    ) -> impl Future<Output = Result<Response>> + Send;
}

/// Assemble an API URL for the supplied path and raw query string
pub fn compose_api_url<C: ApiClient>(client: &C, path: &str, query: &str) -> Result<String> {
    let credentials = client.credentials();
    let mut url = Url::parse(&format!(
        "{}://{}",
        credentials.api_scheme, credentials.api_host
    ))
    .with_context(|| format!("invalid API base '{}://{}'", credentials.api_scheme, credentials.api_host))?;
    url.set_path(path);
    if !query.is_empty() {
        url.set_query(Some(query));
    }
    Ok(url.to_string())
}
