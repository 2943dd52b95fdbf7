use std::collections::HashMap;

use serde::Deserialize;

/// Static connection settings for an OAuth2 password-grant API.
///
/// Created once and checked by
/// [`check_api_client_preconditions`](crate::client::conditions::check_api_client_preconditions)
/// before any network call.
#[derive(Clone, Deserialize, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub api_token_url: String,
    pub api_host: String,
    pub api_scheme: String,
    pub grant_type: String,
    pub username: String,
    pub password: String,
    /// optional static headers, e.g. X-Workstation
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,
}

// secrets stay out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_token_url", &self.api_token_url)
            .field("api_host", &self.api_host)
            .field("api_scheme", &self.api_scheme)
            .field("grant_type", &self.grant_type)
            .field("username", &self.username)
            .field("extra_headers", &self.extra_headers)
            .finish_non_exhaustive()
    }
}
