//! Sanity checks run around client initialization.

use std::net::IpAddr;

use anyhow::{anyhow, Result};
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;

use crate::client::credentials::Credentials;
use crate::client::token::TokenState;
use crate::client::ApiClient;
use crate::utils::constants::*;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    )
    .unwrap();
    static ref DNS_NAME_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9](?:[a-zA-Z0-9_-]{0,62}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9_-]{0,62}[a-zA-Z0-9])?)*\.?$"
    )
    .unwrap();
}

fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_request_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

fn is_host(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok() || (value.len() <= 253 && DNS_NAME_RE.is_match(value))
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Ensure that the parameters a client is built from make sense.
/// Returns the first failing rule.
pub fn check_api_client_preconditions(credentials: &Credentials) -> Result<()> {
    let client_id = &credentials.client_id;
    if !is_alphanumeric(client_id) || client_id.len() < TOKEN_MIN_LENGTH {
        return Err(anyhow!(
            "{} is not a valid clientId, expected a non-blank alphanumeric string of at least {} characters",
            client_id,
            TOKEN_MIN_LENGTH
        ));
    }

    // the secret itself never goes into the message
    let client_secret = &credentials.client_secret;
    if !is_alphanumeric(client_secret) || client_secret.len() < TOKEN_MIN_LENGTH {
        return Err(anyhow!(
            "the supplied clientSecret is not valid, expected a non-blank alphanumeric string of at least {} characters",
            TOKEN_MIN_LENGTH
        ));
    }

    let api_token_url = &credentials.api_token_url;
    if !is_request_url(api_token_url) {
        return Err(anyhow!(
            "{} is not a valid apiTokenURL, expected an http(s) URL",
            api_token_url
        ));
    }

    let api_host = &credentials.api_host;
    if !is_host(api_host) {
        return Err(anyhow!(
            "{} is not a valid apiHost, expected a valid IP or domain name",
            api_host
        ));
    }

    let api_scheme = &credentials.api_scheme;
    if api_scheme != "http" && api_scheme != "https" {
        return Err(anyhow!(
            "{} is not a valid apiScheme, expected http or https",
            api_scheme
        ));
    }

    if credentials.grant_type != SUPPORTED_GRANT_TYPE {
        return Err(anyhow!(
            "the only supported OAuth grant type for now is '{}'",
            SUPPORTED_GRANT_TYPE
        ));
    }

    if !is_email(&credentials.username) {
        return Err(anyhow!(
            "the username `{}` is not a valid email",
            credentials.username
        ));
    }

    if credentials.password.len() < API_PASSWORD_MIN_LENGTH {
        return Err(anyhow!(
            "the Password should be a string of at least {} characters",
            API_PASSWORD_MIN_LENGTH
        ));
    }

    Ok(())
}

/// Sanity checks on the tokens of a freshly authenticated client
pub fn check_api_client_postconditions(token: &TokenState) -> Result<()> {
    if !is_alphanumeric(&token.access_token) || token.access_token.len() < TOKEN_MIN_LENGTH {
        return Err(anyhow!("invalid access token after APIClient initialization"));
    }

    if token.token_type != BEARER_TOKEN_TYPE {
        return Err(anyhow!(
            "invalid token type after APIClient initialization, expected '{}'",
            BEARER_TOKEN_TYPE
        ));
    }

    if !is_alphanumeric(&token.refresh_token) || token.refresh_token.len() < TOKEN_MIN_LENGTH {
        return Err(anyhow!("invalid Refresh token after APIClient initialization"));
    }

    if !token.scope.is_ascii() || token.scope.len() < TOKEN_MIN_LENGTH {
        return Err(anyhow!("invalid access scope text after APIClient initialization"));
    }

    if token.expires_in < 1 {
        return Err(anyhow!("invalid expiresIn after APIClient initialization"));
    }

    match token.refresh_at {
        Some(at) if at >= Utc::now() => Ok(()),
        _ => Err(anyhow!("invalid past refreshAt after APIClient initialization")),
    }
}

/// Error unless a client was supplied and has authenticated.
pub fn check_api_initialization<C: ApiClient>(client: Option<&C>) -> Result<()> {
    match client {
        Some(c) if c.is_initialized() => Ok(()),
        _ => Err(anyhow!(
            "the API client is not correctly initialized. Please authenticate it first"
        )),
    }
}
