//! Application configuration loaded from the environment
//!
//! `.env` files are honoured via dotenvy before variables are read.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Which price store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub price_cache_ttl: Duration,
}

impl Config {
    /// Load `.env` (if present) and read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, "BIND_ADDR", "0.0.0.0:4567")?;

        let store_backend = match lookup("STORE_BACKEND").as_deref() {
            None | Some("postgres") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let database_url = lookup("DATABASE_URL");
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", "5")?;
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", "true")?;
        let ttl_secs: u64 = parse_or(&lookup, "PRICE_CACHE_TTL_SECS", "600")?;
        if ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "PRICE_CACHE_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            store_backend,
            database_url,
            database_max_connections,
            run_migrations,
            price_cache_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
