//! Server and database configuration loaded from environment variables.

use sqlx::postgres::PgConnectOptions;

/// A configuration value that is missing or cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Read `var` through `lookup` and parse it, falling back to `default`.
fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
        None => Ok(default),
    }
}

fn env_lookup(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal
    /// (default: `30`).
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16, "u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64, "u64")?;
        let shutdown_timeout_secs = parse_or(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30u64, "u64")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
        })
    }
}

/// Database connection settings.
///
/// `DATABASE_URL` wins when set. Otherwise the connection is assembled from
/// the discrete variables, of which only `DATABASE_NAME` is required.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
    pub user: String,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load database settings from environment variables.
    ///
    /// | Env Var                      | Default     |
    /// |------------------------------|-------------|
    /// | `DATABASE_URL`               | unset       |
    /// | `DATABASE_NAME`              | required without `DATABASE_URL` |
    /// | `DATABASE_USER`              | `postgres`  |
    /// | `DATABASE_PASSWORD` / `PASSWORD` | unset   |
    /// | `DATABASE_HOST`              | `localhost` |
    /// | `DATABASE_PORT`              | `5432`      |
    /// | `DATABASE_MAX_CONNECTIONS`   | `20`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty());
        let name = lookup("DATABASE_NAME").filter(|n| !n.trim().is_empty());
        if url.is_none() && name.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL or DATABASE_NAME"));
        }

        Ok(Self {
            url,
            name,
            user: lookup("DATABASE_USER").unwrap_or_else(|| "postgres".into()),
            password: lookup("DATABASE_PASSWORD").or_else(|| lookup("PASSWORD")),
            host: lookup("DATABASE_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(&lookup, "DATABASE_PORT", 5432u16, "u16")?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 20u32, "u32")?,
        })
    }

    /// Connection options for the pool.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user);
        if let Some(name) = &self.name {
            options = options.database(name);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}
