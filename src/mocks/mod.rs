//! Test doubles shared by this crate's tests and by downstream services.

pub mod http;
pub mod io;
