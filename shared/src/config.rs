//! Configuration management for Lambda functions.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host
    pub db_host: String,
    /// Database name
    pub db_name: String,
    /// Database user
    pub db_user: String,
    /// Database access credential
    pub db_password: String,
    /// Directory holding the bundled frontend assets
    pub frontend_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_HOST` and `DATABASE_PASSWORD` are required; the rest fall
    /// back to sensible defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db_host: require("DATABASE_HOST")?,
            db_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "events".to_string()),
            db_user: env::var("DATABASE_USER").unwrap_or_else(|_| "postgres".to_string()),
            db_password: require("DATABASE_PASSWORD")?,
            frontend_dir: env::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend".to_string()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("{} not set", name)))
}
