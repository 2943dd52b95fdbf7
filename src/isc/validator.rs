use std::collections::HashMap;

use http::header::{HeaderMap, AUTHORIZATION};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::debug;

use crate::isc::claims::Claims;
use crate::server::response::error_map;
use crate::utils::constants::BEARER_TOKEN_TYPE;

/// Check the `Authorization: Bearer <jwt>` header of an inbound request against `key`.
///
/// Returns `(true, None, Some(claims))` on success and `(false, Some(error map), None)`
/// otherwise, the map holding a single `error` entry.
pub fn has_valid_jwt_bearer_token(
    headers: &HeaderMap,
    key: &[u8],
) -> (bool, Option<HashMap<String, String>>, Option<Claims>) {
    match bearer_claims(headers, key) {
        Ok(claims) => (true, None, Some(claims)),
        Err(message) => {
            debug!("rejected inter-service token: {}", message);
            (false, Some(error_map(message)), None)
        }
    }
}

fn bearer_claims(headers: &HeaderMap, key: &[u8]) -> Result<Claims, String> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| "expected an `Authorization` request header".to_owned())?;

    let token = header
        .strip_prefix(BEARER_TOKEN_TYPE)
        .and_then(|rest| rest.strip_prefix(' '))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "expected a `Bearer` token".to_owned())?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(token, &DecodingKey::from_secret(key), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => "signature is invalid".to_owned(),
            ErrorKind::ExpiredSignature => "token is expired".to_owned(),
            _ => e.to_string(),
        })
}
