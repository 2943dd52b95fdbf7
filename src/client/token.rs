use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::helpers::time::refresh_deadline;
use crate::utils::constants::TOKEN_EXPIRY_RATIO;

/// Token endpoint response body
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OAuthResponse {
    pub scope: String,
    pub expires_in: i64,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Tokens held by a client between authentication and the next refresh
#[derive(Debug, Clone, Default)]
pub struct TokenState {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: i64,
    /// None until the first successful authentication
    pub refresh_at: Option<DateTime<Utc>>,
}

impl TokenState {
    /// Overwrite every field from a fresh token response and recompute the refresh deadline.
    /// State is left untouched when the deadline cannot be computed.
    pub fn update(&mut self, auth: OAuthResponse) -> Result<()> {
        let refresh_at = refresh_deadline(auth.expires_in, TOKEN_EXPIRY_RATIO)
            .context("unable to schedule token refresh")?;
        self.refresh_at = Some(refresh_at);
        self.access_token = auth.access_token;
        self.token_type = auth.token_type;
        self.scope = auth.scope;
        self.refresh_token = auth.refresh_token;
        self.expires_in = auth.expires_in;
        Ok(())
    }

    /// Check if token should be refreshed
    pub fn should_refresh(&self) -> bool {
        self.refresh_at.map_or(true, |at| Utc::now() > at)
    }
}

/// Fail on a non-2xx status, keeping the raw body when it can be read.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match response.text().await {
        Ok(body) => Err(anyhow!(
            "server error status: {}\nraw response: {}",
            status.as_u16(),
            body
        )),
        Err(_) => Err(anyhow!("server error status: {}", status.as_u16())),
    }
}

/// Extract the token endpoint response from the supplied HTTP response
pub async fn decode_oauth_response(response: Response) -> Result<OAuthResponse> {
    let bytes = response
        .bytes()
        .await
        .context("unable to read token response body")?;
    serde_json::from_slice(&bytes).context("unable to decode token response as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn response(expires_in: i64) -> OAuthResponse {
        OAuthResponse {
            scope: "read write introspection".to_owned(),
            expires_in,
            access_token: "AccessToken0123456789".to_owned(),
            refresh_token: "RefreshToken0123456789".to_owned(),
            token_type: "Bearer".to_owned(),
        }
    }

    #[test]
    fn fresh_state_needs_refresh() {
        assert!(TokenState::default().should_refresh());
    }

    #[test]
    fn update_sets_deadline_before_expiry() {
        let before = Utc::now();
        let mut state = TokenState::default();
        state.update(response(3600)).unwrap();

        let refresh_at = state.refresh_at.unwrap();
        assert!(refresh_at >= before + Duration::seconds(3419));
        assert!(refresh_at < before + Duration::seconds(3600));
        assert_eq!(state.access_token, "AccessToken0123456789");
        assert!(!state.should_refresh());
    }

    #[test]
    fn update_overwrites_previous_tokens() {
        let mut state = TokenState::default();
        state.update(response(3600)).unwrap();
        let mut second = response(60);
        second.access_token = "SecondAccessToken123".to_owned();
        state.update(second).unwrap();

        assert_eq!(state.access_token, "SecondAccessToken123");
        assert_eq!(state.expires_in, 60);
    }

    #[test]
    fn out_of_range_lifetime_keeps_previous_tokens() {
        let mut state = TokenState::default();
        state.update(response(3600)).unwrap();
        let refresh_at = state.refresh_at;

        let mut huge = response(i64::MAX);
        huge.access_token = "NeverStoredToken123".to_owned();
        assert!(state.update(huge).is_err());
        assert_eq!(state.access_token, "AccessToken0123456789");
        assert_eq!(state.expires_in, 3600);
        assert_eq!(state.refresh_at, refresh_at);
    }

    #[test]
    fn decodes_wire_format() {
        let body = r#"{"scope":"read","expires_in":36000,"access_token":"a","refresh_token":"r","token_type":"Bearer"}"#;
        let decoded: OAuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.expires_in, 36000);
        assert_eq!(decoded.token_type, "Bearer");
    }
}
