use dotenvy::dotenv;
use log::{debug, info};
use std::env as stdenv;

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Loads `.env` from the working directory if there is one.
pub fn load_env_file() {
    match dotenv() {
        Ok(path) => info!(".env loaded from: {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}

/// Reads `key`, falling back to `default` when it is unset or empty.
pub fn load_env_var(key: &str, default: &str) -> String {
    match stdenv::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: load_env_var("HOST", DEFAULT_HOST),
            port: load_env_var("PORT", DEFAULT_PORT),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}
