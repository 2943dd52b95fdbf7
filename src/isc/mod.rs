//! Inter-service authentication: short-lived HS256 JWTs that identify one
//! backend service to another, and the checks that guard inbound requests.

pub mod claims;
pub mod client;
pub mod deps;
pub mod middleware;
pub mod validator;

pub use claims::{sign_service_token, Claims};
pub use client::{default_headers, InterServiceClient, IscService};
pub use deps::{get_dep_from_config, load_deps_from_yaml, Dep};
pub use middleware::{require_inter_service_token, InterServiceAuth};
pub use validator::has_valid_jwt_bearer_token;
