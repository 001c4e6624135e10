use std::env;
use std::str::FromStr;
use std::time::Duration;

use sea_orm::ConnectOptions;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
pub fn load_env_files() -> String {
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    rust_env
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn parsed_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);
        opt
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_env: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Adds `Secure` to the session cookie.
    pub cookie_secure: bool,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env(rust_env: String) -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parsed_or("PORT", 8080u16)?;

        let database = DatabaseConfig {
            url: required("DATABASE_URL")?,
            max_connections: parsed_or("DB_MAX_CONNECTIONS", 50u32)?,
            min_connections: parsed_or("DB_MIN_CONNECTIONS", 10u32)?,
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        let is_production = rust_env == "production";
        let cookie_secure = parsed_or("COOKIE_SECURE", is_production)?;
        let run_migrations = parsed_or("RUN_MIGRATIONS", !is_production)?;

        Ok(Self {
            rust_env,
            host,
            port,
            database,
            cookie_secure,
            run_migrations,
        })
    }

    pub fn is_production(&self) -> bool {
        self.rust_env == "production"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
