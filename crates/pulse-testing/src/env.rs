//! In-memory environment for loader tests.
//!
//! Tests never touch the process environment: `std::env::set_var` races with
//! other test threads, so loaders are driven through [`MockEnv`] instead.

use std::collections::HashMap;

use pulse_core::env::EnvSource;

/// The five variables a pulse service refuses to start without.
pub const REQUIRED_VARS: [&str; 5] = [
    "DB_HOST",
    "DB_USER",
    "DB_NAME",
    "JWT_SECRET",
    "REFRESH_SECRET",
];

/// Map-backed [`EnvSource`] with builder-style setters.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` (an empty `value` still counts as present).
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Remove `key` so it reads as absent.
    pub fn without(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }
}

impl EnvSource for MockEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Only the required variables, set to short non-empty values.
pub fn required_env() -> MockEnv {
    MockEnv::new()
        .with("DB_HOST", "db")
        .with("DB_USER", "u")
        .with("DB_NAME", "pulse")
        .with("JWT_SECRET", "a")
        .with("REFRESH_SECRET", "b")
}

/// Every variable the api service reads, none left at its default.
pub fn full_env() -> MockEnv {
    MockEnv::new()
        .with("SERVER_PORT", "9000")
        .with("APP_ENV", "production")
        .with("DB_HOST", "db.internal")
        .with("DB_PORT", "6543")
        .with("DB_USER", "pulse_app")
        .with("DB_PASSWORD", "s3cret")
        .with("DB_NAME", "pulse_prod")
        .with("DB_SSL_MODE", "require")
        .with("JWT_SECRET", "access-secret")
        .with("REFRESH_SECRET", "refresh-secret")
        .with("JWT_EXPIRATION", "3600")
}
