//! # Service Utilities Library
//!
//! Building blocks shared by backend services: an OAuth2 password-grant API
//! client with proactive refresh, inter-service JWT issuing and validation,
//! GraphQL-style string enums, typed models and test doubles.
//!
//! Modules:
//! - `client`: OAuth2 `ServerClient` and the `ApiClient` trait
//! - `isc`: inter-service tokens, validator and axum middleware
//! - `config`: service configuration from YAML or the environment
//! - `enums`, `models`: shared schema types
//! - `helpers`: map converters, random values, time
//! - `mocks`: failing IO and throwaway HTTP servers for tests

pub mod client;
pub mod config;
pub mod enums;
pub mod helpers;
pub mod isc;
pub mod mocks;
pub mod models;
pub mod observability;
pub mod server;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::client::server_client::ServerClient;
pub use crate::client::ApiClient;
pub use crate::config::settings::ServiceConfig;
pub use crate::isc::InterServiceClient;
