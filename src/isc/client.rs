use anyhow::{anyhow, Context, Result};
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::settings::InterServiceConfig;
use crate::isc::claims::sign_service_token;
use crate::isc::deps::Dep;
use crate::utils::constants::JSON_CONTENT_TYPE;

/// Identity of the service being called
#[derive(Debug, Clone, Deserialize)]
pub struct IscService {
    pub name: String,
    pub root_domain: String,
}

/// Client that calls a peer service with a signed inter-service token.
#[derive(Debug, Clone)]
pub struct InterServiceClient {
    pub name: String,
    pub request_root_domain: String,
    config: InterServiceConfig,
    http_client: Client,
}

impl InterServiceClient {
    pub fn new(service: IscService, config: InterServiceConfig) -> Result<Self> {
        if service.name.trim().is_empty() {
            return Err(anyhow!("inter-service client needs a service name"));
        }
        Url::parse(&service.root_domain)
            .with_context(|| format!("invalid root domain '{}' for service '{}'", service.root_domain, service.name))?;

        Ok(Self {
            name: service.name,
            request_root_domain: service.root_domain.trim_end_matches('/').to_owned(),
            config,
            http_client: Client::new(),
        })
    }

    pub fn from_dep(dep: &Dep, config: InterServiceConfig) -> Result<Self> {
        Self::new(
            IscService {
                name: dep.dep_name.clone(),
                root_domain: dep.dep_root_domain.clone(),
            },
            config,
        )
    }

    /// Sign a token identifying this client, valid for the configured number of minutes.
    pub fn create_auth_token(&self) -> Result<String> {
        sign_service_token(&self.name, &self.config)
    }

    /// Send `body` as JSON to `<root domain>/<path>` with a fresh bearer token.
    /// The response is returned whatever its status.
    pub async fn make_request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response> {
        let url = format!("{}/{}", self.request_root_domain, path.trim_start_matches('/'));
        let headers = default_headers(self)?;

        debug!(service = %self.name, method = %method, url = %url, "inter-service request");
        let mut request = self.http_client.request(method, &url).headers(headers);
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }
        request
            .send()
            .await
            .with_context(|| format!("inter-service request to {} failed", url))
    }
}

/// JSON headers plus a freshly minted bearer token
pub fn default_headers(client: &InterServiceClient) -> Result<HeaderMap> {
    let token = client.create_auth_token()?;
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token))?,
    );
    Ok(headers)
}
