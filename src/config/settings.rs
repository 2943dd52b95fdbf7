use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::client::credentials::Credentials;
use crate::isc::deps::Dep;
use crate::utils::constants::*;

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    /// OAuth2 API client section; absent for services that only talk ISC
    pub api: Option<Credentials>,
    pub workstation_id: Option<String>,
    #[serde(default)]
    pub inter_service: InterServiceConfig,
    #[serde(default)]
    pub deps: Vec<Dep>,
    pub logging: Option<LoggingConfig>,
}

impl ServiceConfig {
    /// Build the configuration from the process environment.
    ///
    /// The API section is only populated when every required variable is set;
    /// the workstation id is optional.
    pub fn from_env() -> Self {
        let api = credentials_from_env()
            .inspect_err(|e| tracing::debug!("api client section not configured: {}", e))
            .ok();

        Self {
            api,
            workstation_id: std::env::var(WORKSTATION_ENV_VAR).ok(),
            inter_service: InterServiceConfig {
                jwt_key: std::env::var(JWT_KEY_ENV_VAR).unwrap_or_default(),
                token_expire_minutes: std::env::var(ISC_EXPIRE_ENV_VAR)
                    .unwrap_or_else(|_| DEFAULT_ISC_EXPIRE_MINUTES.to_string()),
            },
            deps: Vec::new(),
            logging: Some(LoggingConfig::new("info".to_owned(), LogFormat::from_env())),
        }
    }

    /// Credentials with the configured extra headers merged in.
    pub fn api_credentials(&self) -> Result<Credentials> {
        let mut credentials = self
            .api
            .clone()
            .ok_or_else(|| anyhow!("config: 'api' section is missing"))?;
        if let Some(workstation_id) = &self.workstation_id {
            credentials
                .extra_headers
                .insert(WORKSTATION_HEADER_NAME.to_owned(), workstation_id.to_owned());
        }
        Ok(credentials)
    }
}

fn credentials_from_env() -> Result<Credentials> {
    let var = |name: &str| std::env::var(name).with_context(|| format!("{} env var not found", name));
    Ok(Credentials {
        client_id: var(CLIENT_ID_ENV_VAR)?,
        client_secret: var(CLIENT_SECRET_ENV_VAR)?,
        api_token_url: var(TOKEN_URL_ENV_VAR)?,
        api_host: var(API_HOST_ENV_VAR)?,
        api_scheme: var(API_SCHEME_ENV_VAR)?,
        grant_type: var(GRANT_TYPE_ENV_VAR)?,
        username: var(USERNAME_ENV_VAR)?,
        password: var(PASSWORD_ENV_VAR)?,
        extra_headers: HashMap::new(),
    })
}

/// ================================
/// Inter-service authentication
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct InterServiceConfig {
    /// shared HMAC secret
    #[serde(default)]
    pub jwt_key: String,
    /// kept raw: parsed when a token is minted
    #[serde(default = "default_isc_expire_minutes")]
    pub token_expire_minutes: String,
}

impl Default for InterServiceConfig {
    fn default() -> Self {
        Self {
            jwt_key: String::new(),
            token_expire_minutes: default_isc_expire_minutes(),
        }
    }
}

impl InterServiceConfig {
    pub fn new(jwt_key: impl Into<String>, token_expire_minutes: impl Into<String>) -> Self {
        Self {
            jwt_key: jwt_key.into(),
            token_expire_minutes: token_expire_minutes.into(),
        }
    }

    pub fn jwt_key(&self) -> &[u8] {
        self.jwt_key.as_bytes()
    }

    pub fn expire_minutes(&self) -> Result<i64> {
        self.token_expire_minutes.trim().parse::<i64>().map_err(|e| {
            anyhow!(
                "invalid inter-service token expiry '{}': {}",
                self.token_expire_minutes,
                e
            )
        })
    }
}

fn default_isc_expire_minutes() -> String {
    DEFAULT_ISC_EXPIRE_MINUTES.to_string()
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "json".to_string())
            .to_lowercase()
            .as_str()
        {
            "compact" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn expire_minutes_parses_integer() {
        let cfg = InterServiceConfig::new("an open secret", " 15 ");
        assert_eq!(cfg.expire_minutes().unwrap(), 15);
    }

    #[test]
    fn expire_minutes_rejects_garbage() {
        let cfg = InterServiceConfig::new("an open secret", "not a valid int");
        let err = cfg.expire_minutes().unwrap_err();
        assert!(err.to_string().contains("not a valid int"));
    }

    #[test]
    fn workstation_header_is_merged_into_credentials() {
        let cfg = ServiceConfig {
            api: Some(Credentials::default()),
            workstation_id: Some("ws-1".to_owned()),
            ..Default::default()
        };
        let credentials = cfg.api_credentials().unwrap();
        assert_eq!(
            credentials.extra_headers.get(WORKSTATION_HEADER_NAME).map(String::as_str),
            Some("ws-1")
        );
    }

    #[test]
    fn missing_api_section_is_an_error() {
        let err = ServiceConfig::default().api_credentials().unwrap_err();
        assert!(err.to_string().contains("'api' section is missing"));
    }

    #[test]
    #[serial]
    fn from_env_reads_inter_service_settings() {
        std::env::set_var(JWT_KEY_ENV_VAR, "an open secret");
        std::env::set_var(ISC_EXPIRE_ENV_VAR, "7");
        let cfg = ServiceConfig::from_env();
        assert_eq!(cfg.inter_service.jwt_key, "an open secret");
        assert_eq!(cfg.inter_service.expire_minutes().unwrap(), 7);
        std::env::remove_var(JWT_KEY_ENV_VAR);
        std::env::remove_var(ISC_EXPIRE_ENV_VAR);
    }
}
