use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use reqwest::{Body, Client, Response, Url};
use tracing::{debug, info, warn};

use crate::client::conditions::{check_api_client_postconditions, check_api_client_preconditions};
use crate::client::credentials::Credentials;
use crate::client::token::{decode_oauth_response, ensure_success, OAuthResponse, TokenState};
use crate::client::ApiClient;
use crate::config::settings::ServiceConfig;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::*;

static SUCCESS: &str = "success";
static FAILURE: &str = "failure";

/// General purpose client for servers that offer an HTTP API and support
/// OAuth2 authentication with the password grant type.
///
/// Token state is mutated through `&mut self`; a client shared between tasks
/// has to sit behind a lock, and concurrent refreshes are not de-duplicated.
#[derive(Debug, Clone)]
pub struct ServerClient {
    credentials: Credentials,
    http_client: Client,
    token: TokenState,
    is_initialized: bool,
}

impl ServerClient {
    /// Validate the credentials and build the HTTP client. No network call is made.
    pub fn new(credentials: Credentials) -> Result<Self> {
        check_api_client_preconditions(&credentials)
            .context("server client precondition check error")?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(HTTP_CLIENT_TIMEOUT_SECS))
            .build()
            .context("unable to build HTTP client")?;

        Ok(Self {
            credentials,
            http_client,
            token: TokenState::default(),
            is_initialized: false,
        })
    }

    /// Replace the underlying HTTP client (custom timeouts, proxies, tests).
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Build and authenticate a client in one step.
    pub async fn initialize(credentials: Credentials) -> Result<Self> {
        let mut client = Self::new(credentials).context("unable to initialize server client")?;
        client
            .authenticate()
            .await
            .context("unable to initialize server client")?;
        Ok(client)
    }

    /// Authenticated client built from the `api` section of the service config.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        Self::initialize(config.api_credentials()?).await
    }

    /// Single mutation point for token state.
    pub fn update_auth(&mut self, auth: OAuthResponse) -> Result<()> {
        self.token.update(auth)
    }

    /// User profile URL on the authentication server
    pub fn me_url(&self) -> Result<String> {
        let token_url = Url::parse(&self.credentials.api_token_url)
            .with_context(|| format!("invalid token URL '{}'", self.credentials.api_token_url))?;
        let host = token_url
            .host_str()
            .ok_or_else(|| anyhow!("token URL '{}' has no host", self.credentials.api_token_url))?;
        let authority = match token_url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_owned(),
        };
        Ok(format!("{}://{}/{}", token_url.scheme(), authority, ME_URL_FRAGMENT))
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn token_type(&self) -> &str {
        &self.token.token_type
    }

    pub fn refresh_token(&self) -> &str {
        &self.token.refresh_token
    }

    pub fn access_scope(&self) -> &str {
        &self.token.scope
    }

    pub fn expires_in(&self) -> i64 {
        self.token.expires_in
    }

    pub fn refresh_at(&self) -> Option<DateTime<Utc>> {
        self.token.refresh_at
    }

    async fn post_form(&self, form: &[(&str, &str)]) -> Result<OAuthResponse> {
        let response = self
            .http_client
            .post(&self.credentials.api_token_url)
            .form(form)
            .send()
            .await
            .with_context(|| format!("token request to {} failed", self.credentials.api_token_url))?;
        let response = ensure_success(response).await?;
        decode_oauth_response(response).await
    }

    async fn try_authenticate(&mut self) -> Result<()> {
        check_api_client_preconditions(&self.credentials)
            .context("failing API client preconditions")?;

        let credentials = &self.credentials;
        let form = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", credentials.grant_type.as_str()),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];
        let auth = self.post_form(&form).await?;
        self.update_auth(auth)?;

        check_api_client_postconditions(&self.token)
            .context("server client postcondition check error")?;
        self.is_initialized = true;
        Ok(())
    }

    async fn try_refresh(&mut self) -> Result<()> {
        if !self.is_initialized {
            return Err(anyhow!("cannot refresh API tokens on an uninitialized client"));
        }
        let credentials = &self.credentials;
        let form = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", REFRESH_GRANT_TYPE),
            ("refresh_token", self.token.refresh_token.as_str()),
        ];
        let auth = self.post_form(&form).await?;
        self.update_auth(auth)?;
        Ok(())
    }

    async fn send_request(&mut self, method: Method, url: &str, body: Option<Body>) -> Result<Response> {
        if self.token.should_refresh() {
            debug!("refresh deadline passed, refreshing tokens");
            self.refresh().await?;
        }

        let mut request = self
            .http_client
            .request(method.clone(), url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(AUTHORIZATION, format!("Bearer {}", self.token.access_token));

        // extra headers e.g X-Workstation
        for (key, value) in &self.credentials.extra_headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        debug!(
            method = %method,
            url = %url,
            extra_headers = ?header_names(&self.credentials.extra_headers),
            "sending authenticated request"
        );

        let response = request.send().await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        if content_type != JSON_CONTENT_TYPE {
            let status = response.status();
            match response.text().await {
                Ok(body) => debug!(%status, body = %body, "mismatched content type body"),
                Err(e) => debug!(%status, error = %e, "mismatched content type, body unreadable"),
            }
            return Err(anyhow!(
                "expected {} Content-Type, got {}",
                JSON_CONTENT_TYPE,
                content_type
            ));
        }
        Ok(response)
    }
}

fn header_names(headers: &HashMap<String, String>) -> Vec<&str> {
    headers.keys().map(String::as_str).collect()
}

impl ApiClient for ServerClient {
    fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn token(&self) -> &TokenState {
        &self.token
    }

    /// Log in to the OAuth2 server with the stored credentials
    async fn authenticate(&mut self) -> Result<()> {
        let metrics = get_metrics().await;
        match self.try_authenticate().await {
            Ok(()) => {
                info!(token_url = %self.credentials.api_token_url, "api client authenticated");
                metrics.authentications.with_label_values(&[SUCCESS]).inc();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "api client authentication failed");
                metrics.authentications.with_label_values(&[FAILURE]).inc();
                Err(e)
            }
        }
    }

    /// Use the refresh token to obtain a fresh access token
    async fn refresh(&mut self) -> Result<()> {
        let metrics = get_metrics().await;
        let result = self.try_refresh().await;
        let outcome = if result.is_ok() { SUCCESS } else { FAILURE };
        metrics.refreshes.with_label_values(&[outcome]).inc();
        result.inspect_err(|e| warn!(error = %e, "token refresh failed"))
    }

    /// Compose and send an authenticated JSON request
    async fn make_request(&mut self, method: Method, url: &str, body: Option<Body>) -> Result<Response> {
        let metrics = get_metrics().await;
        let result = self.send_request(method, url, body).await;
        let outcome = if result.is_ok() { SUCCESS } else { FAILURE };
        metrics.api_requests.with_label_values(&[outcome]).inc();
        result
    }
}

/// Authenticate a throwaway client and hand back its access token.
pub async fn get_access_token(credentials: &Credentials) -> Result<String> {
    let client = ServerClient::initialize(credentials.clone())
        .await
        .context("can't get server client for access token")?;
    Ok(client.access_token().to_owned())
}

/// One-shot form POST with a JSON `Accept` header.
pub async fn new_post_request(
    url: &str,
    form: &[(String, String)],
    headers: &HashMap<String, String>,
    timeout_secs: u64,
) -> Result<Response> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    let mut request = client.post(url).form(form);
    for (key, value) in headers {
        request = request.header(key.as_str(), value.as_str());
    }
    request = request.header(ACCEPT, JSON_CONTENT_TYPE);
    Ok(request.send().await?)
}
