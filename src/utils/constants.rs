//! Shared constants and invariants

/// Fraction of the token lifetime to wait before refreshing.
pub const TOKEN_EXPIRY_RATIO: f64 = 0.95;
pub const TOKEN_MIN_LENGTH: usize = 12;
pub const API_PASSWORD_MIN_LENGTH: usize = 3;

/// Half an hour, long enough for slow data crawls.
pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 60 * 30;

pub const ME_URL_FRAGMENT: &str = "v1/user/me/?format=json";
pub const SUPPORTED_GRANT_TYPE: &str = "password";
pub const REFRESH_GRANT_TYPE: &str = "refresh_token";
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const WORKSTATION_HEADER_NAME: &str = "X-Workstation";
pub const DEFAULT_ISC_EXPIRE_MINUTES: i64 = 5;

// Environment variables
pub const CLIENT_ID_ENV_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_ENV_VAR: &str = "CLIENT_SECRET";
pub const USERNAME_ENV_VAR: &str = "USERNAME";
pub const PASSWORD_ENV_VAR: &str = "PASSWORD";
pub const GRANT_TYPE_ENV_VAR: &str = "GRANT_TYPE";
pub const API_SCHEME_ENV_VAR: &str = "API_SCHEME";
pub const TOKEN_URL_ENV_VAR: &str = "TOKEN_URL";
pub const API_HOST_ENV_VAR: &str = "HOST";
pub const WORKSTATION_ENV_VAR: &str = "DEFAULT_WORKSTATION_ID";
pub const JWT_KEY_ENV_VAR: &str = "JWT_KEY";
pub const ISC_EXPIRE_ENV_VAR: &str = "INTER_SERVICE_TOKEN_EXPIRE_MINUTES";
