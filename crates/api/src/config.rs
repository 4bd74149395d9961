use std::net::{IpAddr, SocketAddr};

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres connection string.
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// Explicit CORS allow-list. Empty means any origin is mirrored back.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum request body size; bounds inline image uploads.
    pub max_upload_bytes: usize,
    /// Connection pool size (default: `10`).
    pub db_max_connections: u32,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                                   |
    /// |------------------------|-------------------------------------------|
    /// | `DATABASE_URL`         | `postgres://localhost:5432/portfolio_db`  |
    /// | `HOST`                 | `0.0.0.0`                                 |
    /// | `PORT`                 | `8001`                                    |
    /// | `CORS_ORIGINS`         | *(unset: any origin)*                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                      |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                                |
    /// | `DB_MAX_CONNECTIONS`   | `10`                                      |
    /// | `LOG_FORMAT`           | `text` (`text` or `json`)                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = var("DATABASE_URL", "postgres://localhost:5432/portfolio_db");
        let host = parse("HOST", "an IP address", var("HOST", "0.0.0.0"))?;
        let port = parse("PORT", "a valid u16", var("PORT", "8001"))?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse(
            "REQUEST_TIMEOUT_SECS",
            "a valid u64",
            var("REQUEST_TIMEOUT_SECS", "30"),
        )?;
        // A zero timeout would fail every request with 408.
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                expected: "a positive number of seconds",
                value: var("REQUEST_TIMEOUT_SECS", "30"),
            });
        }
        let max_upload_bytes = parse(
            "MAX_UPLOAD_BYTES",
            "a byte count",
            var("MAX_UPLOAD_BYTES", "10485760"),
        )?;
        let db_max_connections = parse(
            "DB_MAX_CONNECTIONS",
            "a valid u32",
            var("DB_MAX_CONNECTIONS", "10"),
        )?;

        let log_format = match var("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            _ => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    expected: "`text` or `json`",
                    value: var("LOG_FORMAT", "text"),
                })
            }
        };

        Ok(Self {
            database_url,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            db_max_connections,
            log_format,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        })
}
