//! Demo service that keeps one API key in process memory and serves it over HTTP.
//!
//! Nothing here is meant for production: the key is neither persisted nor protected.

pub mod config;
pub mod cors;
pub mod error;
pub mod kv_store;
pub mod logger;
pub mod routes;
pub mod types;

pub use error::ApiError;
pub use kv_store::KeyStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

