//! Test utilities for pulse services.
//!
//! Provides `MockEnv` and environment fixtures.
//! Import in `#[cfg(test)]` blocks and integration tests only, never in production code.

pub mod env;
