//! Server configuration from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use notes_store::StoreConfig;

/// Server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Database connection URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
    /// Secret used to sign and verify login tokens.
    pub jwt_secret: String,
    /// Lifetime of issued tokens.
    pub token_expiry_hours: u64,
    /// Reject note creation without a bearer token.
    pub require_auth_for_notes: bool,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Directory of built frontend assets served for unmatched paths.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `JWT_SECRET`: Token signing secret
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 3001)
    /// - `APP_ENV`: `test` reads `TEST_DATABASE_URL` instead of `DATABASE_URL`
    /// - `DATABASE_URL` / `TEST_DATABASE_URL`: PostgreSQL URL (default: in-memory store)
    /// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5)
    /// - `TOKEN_EXPIRY_HOURS`: Token lifetime (default: 1)
    /// - `REQUIRE_AUTH_FOR_NOTES`: Require a token to create notes (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `STATIC_DIR`: Frontend build directory (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let url_var = match lookup("APP_ENV").as_deref() {
            Some("test") => "TEST_DATABASE_URL",
            _ => "DATABASE_URL",
        };
        let database_url = lookup(url_var).filter(|s| !s.is_empty());

        Ok(Self {
            port: parse_var(&lookup, "PORT", 3001)?,
            database_url,
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_secret,
            token_expiry_hours: parse_var(&lookup, "TOKEN_EXPIRY_HOURS", 1)?,
            require_auth_for_notes: parse_bool(&lookup, "REQUIRE_AUTH_FOR_NOTES", false)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string()),
            static_dir: lookup("STATIC_DIR")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Configuration suitable for tests: in-memory store, fixed secret.
    pub fn for_tests() -> Self {
        Self {
            port: 0,
            database_url: None,
            max_connections: 1,
            jwt_secret: "test-secret".to_string(),
            token_expiry_hours: 1,
            require_auth_for_notes: false,
            log_level: "debug".to_string(),
            cors_allowed_origins: "*".to_string(),
            static_dir: None,
        }
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Store settings when a database is configured.
    pub fn store_config(&self) -> Option<StoreConfig> {
        self.database_url.as_ref().map(|url| StoreConfig {
            max_connections: self.max_connections,
            ..StoreConfig::new(url.clone())
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database", &self.database_url.is_some())
            .field("max_connections", &self.max_connections)
            .field("token_expiry_hours", &self.token_expiry_hours)
            .field("require_auth_for_notes", &self.require_auth_for_notes)
            .field("log_level", &self.log_level)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("static_dir", &self.static_dir)
            .finish_non_exhaustive()
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_bool<F>(lookup: &F, name: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).map(|s| s.trim().to_lowercase()).as_deref() {
        None => Ok(default),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = ServerConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s")])).unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.token_expiry_hours, 1);
        assert!(!config.require_auth_for_notes);
        assert!(config.database_url.is_none());
        assert!(config.store_config().is_none());
    }

    #[test]
    fn test_missing_secret() {
        let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(name) if name == "JWT_SECRET"));
    }

    #[test]
    fn test_test_env_selects_test_database() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("APP_ENV", "test"),
            ("DATABASE_URL", "postgres://prod"),
            ("TEST_DATABASE_URL", "postgres://test"),
        ]))
        .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("postgres://test"));
    }

    #[test]
    fn test_store_config_uses_pool_size() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("DATABASE_URL", "postgres://prod"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        let store = config.store_config().unwrap();
        assert_eq!(store.database_url, "postgres://prod");
        assert_eq!(store.max_connections, 12);
    }

    #[test]
    fn test_invalid_port() {
        let err =
            ServerConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s"), ("PORT", "http")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name, .. } if name == "PORT"));
    }

    #[test]
    fn test_bool_parsing() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("REQUIRE_AUTH_FOR_NOTES", "TRUE"),
        ]))
        .unwrap();
        assert!(config.require_auth_for_notes);

        let err = ServerConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("REQUIRE_AUTH_FOR_NOTES", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_debug_hides_secret() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("JWT_SECRET", "hunter2")])).unwrap();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
