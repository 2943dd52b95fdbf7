use anyhow::{anyhow, Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config::settings::InterServiceConfig;
use crate::observability::metrics::metrics;

/// Claims carried by an inter-service token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    #[serde(rename = "serviceName", default)]
    pub service_name: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Claims issued now and valid for `minutes`, which must be at least one
    /// and small enough to land on the calendar.
    pub fn issued_now(service_name: impl Into<String>, minutes: i64) -> Result<Self> {
        if minutes < 1 {
            return Err(anyhow!("inter-service token lifetime must be at least 1 minute, got {}", minutes));
        }
        let now = Utc::now();
        let exp = Duration::try_minutes(minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| anyhow!("inter-service token lifetime of {} minutes is out of range", minutes))?;
        Ok(Self {
            service_name: service_name.into(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }

    /// Compact HS256 token
    pub fn sign(&self, key: &[u8]) -> Result<String> {
        encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(key),
        )
        .context("failed to sign inter-service token")
    }
}

/// Sign a token for `service_name` with the configured key and lifetime.
pub fn sign_service_token(service_name: &str, config: &InterServiceConfig) -> Result<String> {
    let minutes = config.expire_minutes()?;
    let token = Claims::issued_now(service_name, minutes)?.sign(config.jwt_key())?;
    metrics().isc_tokens_issued.inc();
    Ok(token)
}
