use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

static DEFAULT_MAX_CONNECTIONS: u32 = 10;
static DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;
static DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 2;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_idle_timeout: Duration,
    pub database_connect_timeout: Duration,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `PG_URL` is accepted in its place for deployments
    /// still using the older variable name. Pool settings fall back to their defaults
    /// when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("PG_URL"))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            database_idle_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_IDLE_TIMEOUT_SECS",
                DEFAULT_IDLE_TIMEOUT_SECS,
            )?),
            database_connect_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
