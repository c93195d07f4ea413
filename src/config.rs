// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    mongodb_uri: String,
    database_name: String,
    listen_addr: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
}

fn default_database_name() -> String {
    "groovelog".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables. `MONGODB_URI` is
    /// required and deliberately has no fallback; startup fails without it.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let mongodb_uri =
            env::var("MONGODB_URI").map_err(|_| ConfigError::Missing("MONGODB_URI"))?;
        let database_name =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| default_database_name());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        Ok(Self {
            mongodb_uri,
            database_name,
            listen_addr,
        })
    }

    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}
