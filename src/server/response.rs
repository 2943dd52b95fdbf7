use std::collections::HashMap;
use std::fmt::Display;

use axum::response::{IntoResponse, Response};
use http::header::CONTENT_TYPE;
use http::StatusCode;
use tracing::error;

use crate::utils::constants::JSON_CONTENT_TYPE;

pub static ERROR_KEY: &str = "error";

/// `{"error": <message>}`
pub fn error_map(err: impl Display) -> HashMap<String, String> {
    HashMap::from([(ERROR_KEY.to_owned(), err.to_string())])
}

/// Write an error response with a JSON `{"error": ...}` body
pub fn respond_with_error(code: StatusCode, err: impl Display) -> Response {
    let payload = serde_json::to_vec(&error_map(&err)).unwrap_or_else(|e| {
        error!("unable to serialize error map: {}", e);
        format!("error: {}", err).into_bytes()
    });
    respond_with_json(code, payload)
}

/// Write a pre-serialized JSON payload with the given status
pub fn respond_with_json(code: StatusCode, payload: Vec<u8>) -> Response {
    (code, [(CONTENT_TYPE, JSON_CONTENT_TYPE)], payload).into_response()
}
