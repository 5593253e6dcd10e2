//! Configuration types for seeding.
//!
//! Connection parameters come from the `POSTGRES_*` environment variables,
//! optionally loaded from a `.env` file in the working directory.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use tracing::debug;

use crate::db::SeedError;
use crate::generators::EntryGenConfig;

pub const ENV_DB_NAME: &str = "POSTGRES_DB";
pub const ENV_DB_USER: &str = "POSTGRES_USER";
pub const ENV_DB_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const ENV_DB_HOST: &str = "POSTGRES_HOST";
pub const ENV_DB_PORT: &str = "POSTGRES_PORT";
pub const ENV_SEED_COUNT: &str = "SEED_COUNT";

/// Port used when `POSTGRES_PORT` is not set.
pub const DEFAULT_PORT: u16 = 5432;

/// Largest row count accepted from `SEED_COUNT`.
pub const MAX_SEED_COUNT: usize = 1_000_000;

/// Loads a `.env` file from the current directory if there is one.
///
/// Variables already present in the environment are not overwritten.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded .env from {}", path.display()),
        Err(e) => debug!("No .env loaded: {e}"),
    }
}

/// Database connection parameters.
#[derive(Clone)]
pub struct DbConfig {
    /// Database name.
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl DbConfig {
    /// Reads the connection parameters from the process environment.
    pub fn from_env() -> Result<Self, SeedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the connection parameters through `lookup`.
    ///
    /// Database name, user, password and host are required; the port falls
    /// back to [`DEFAULT_PORT`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SeedError> {
        let required = |key: &'static str| lookup(key).ok_or(SeedError::MissingEnv(key));

        let port = match lookup(ENV_DB_PORT) {
            Some(value) => parse_var(ENV_DB_PORT, value)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            name: required(ENV_DB_NAME)?,
            user: required(ENV_DB_USER)?,
            password: required(ENV_DB_PASSWORD)?,
            host: required(ENV_DB_HOST)?,
            port,
        })
    }

    /// Builds sqlx connect options for a single connection.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Configuration for a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of rows to insert into each table.
    pub count: usize,

    /// Bounds for the generated fields.
    pub entry: EntryGenConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: 10,
            entry: EntryGenConfig::default(),
        }
    }
}

impl SeedConfig {
    /// Default configuration with `SEED_COUNT` applied if set.
    pub fn from_env() -> Result<Self, SeedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SeedError> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_SEED_COUNT) {
            let count: usize = parse_var(ENV_SEED_COUNT, value.clone())?;
            if count > MAX_SEED_COUNT {
                return Err(SeedError::InvalidEnv {
                    name: ENV_SEED_COUNT,
                    value,
                });
            }
            config.count = count;
        }
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, SeedError> {
    value
        .trim()
        .parse()
        .map_err(|_| SeedError::InvalidEnv { name, value })
}
