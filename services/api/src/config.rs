//! Api service configuration loaded from environment variables.
//!
//! Loading is two steps: [`PulseConfig::assemble`] reads every variable and
//! never fails, then [`validate`] rejects the first required value that is
//! empty. Malformed integers are not errors; they fall back to their default.

use std::fmt;
use std::time::Duration;

use pulse_core::env::{EnvSource, ProcessEnv, env_or_default, env_parse};

use crate::error::ConfigError;

/// Complete service configuration. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on, kept as text (default "8080"). Env var: `SERVER_PORT`.
    pub port: String,
    /// Deployment label such as "production" (default "development"). Env var: `APP_ENV`.
    pub env: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Env var: `DB_HOST` (default "localhost", required).
    pub host: String,
    /// Env var: `DB_PORT` (default 5432). Any signed integer is kept as read.
    pub port: i64,
    /// Env var: `DB_USER` (default "pulse_dev", required).
    pub user: String,
    /// Env var: `DB_PASSWORD` (default empty).
    pub password: String,
    /// Env var: `DB_NAME` (default "pulse", required).
    pub db_name: String,
    /// Env var: `DB_SSL_MODE` (default "disable").
    pub ssl_mode: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    /// HMAC secret for access tokens. Env var: `JWT_SECRET` (required).
    pub access_secret: String,
    /// HMAC secret for refresh tokens. Env var: `REFRESH_SECRET` (required).
    pub refresh_secret: String,
    /// Token lifetime, read as whole seconds (default 86400). Env var: `JWT_EXPIRATION`.
    pub expiration: Duration,
}

impl PulseConfig {
    /// Load and validate from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    /// Load and validate from `env`.
    pub fn from_source<E: EnvSource + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let config = Self::assemble(env);
        validate(&config)?;
        Ok(config)
    }

    /// Read every variable, applying defaults. No validation.
    pub fn assemble<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self {
            server: ServerConfig {
                port: env_or_default(env, "SERVER_PORT", "8080"),
                env: env_or_default(env, "APP_ENV", "development"),
            },
            database: DatabaseConfig {
                host: env_or_default(env, "DB_HOST", "localhost"),
                port: env_parse(env, "DB_PORT", 5432),
                user: env_or_default(env, "DB_USER", "pulse_dev"),
                password: env_or_default(env, "DB_PASSWORD", ""),
                db_name: env_or_default(env, "DB_NAME", "pulse"),
                ssl_mode: env_or_default(env, "DB_SSL_MODE", "disable"),
            },
            jwt: JwtConfig {
                access_secret: env_or_default(env, "JWT_SECRET", ""),
                refresh_secret: env_or_default(env, "REFRESH_SECRET", ""),
                expiration: Duration::from_secs(env_parse(env, "JWT_EXPIRATION", 86_400)),
            },
        }
    }

    /// Re-run the required-field checks. See [`validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self)
    }

    pub fn is_production(&self) -> bool {
        self.server.env.eq_ignore_ascii_case("production")
    }

    pub fn is_development(&self) -> bool {
        self.server.env.eq_ignore_ascii_case("development")
    }
}

impl ServerConfig {
    /// Bind address on every IPv6 and IPv4 interface. An empty port asks the
    /// OS for any free one.
    pub fn listen_addr(&self) -> String {
        let port: &str = if self.port.is_empty() { "0" } else { &self.port };
        format!("[::]:{port}")
    }
}

/// Fail on the first empty required value, in the order
/// `DB_HOST`, `DB_USER`, `DB_NAME`, `JWT_SECRET`, `REFRESH_SECRET`.
pub fn validate(config: &PulseConfig) -> Result<(), ConfigError> {
    let required = [
        ("DB_HOST", &config.database.host),
        ("DB_USER", &config.database.user),
        ("DB_NAME", &config.database.db_name),
        ("JWT_SECRET", &config.jwt.access_secret),
        ("REFRESH_SECRET", &config.jwt.refresh_secret),
    ];
    match required.into_iter().find(|(_, value)| value.is_empty()) {
        Some((var, _)) => Err(ConfigError::MissingRequired(var)),
        None => Ok(()),
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "***" }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &redact(&self.password))
            .field("db_name", &self.db_name)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &redact(&self.access_secret))
            .field("refresh_secret", &redact(&self.refresh_secret))
            .field("expiration", &self.expiration)
            .finish()
    }
}
