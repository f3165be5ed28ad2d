//! Centralized configuration (`.env` file + environment variables).

use std::fmt;
use thiserror::Error;

/// Port the API server listens on (all interfaces).
pub const LISTEN_PORT: u16 = 8080;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load .env file: {0}")]
    EnvFile(#[from] dotenv::Error),
}

/// Loads `.env` from the working directory into the process environment.
///
/// A missing or malformed file is an error; callers treat it as fatal.
pub fn load_env_file() -> Result<(), ConfigError> {
    dotenv::dotenv()?;
    Ok(())
}

/// Database connection settings, read verbatim from the environment.
///
/// Values are plain strings and are not validated here; the connector decides
/// what an unusable value means.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: String,
}

impl DbConfig {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and
    /// `DB_SSL_MODE`. Unset variables read as empty strings.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).unwrap_or_default();
        Self {
            host: var("DB_HOST"),
            port: var("DB_PORT"),
            user: var("DB_USER"),
            password: var("DB_PASSWORD"),
            dbname: var("DB_NAME"),
            sslmode: var("DB_SSL_MODE"),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .field("sslmode", &self.sslmode)
            .finish()
    }
}
