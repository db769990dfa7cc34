//! Shared service plumbing for pulse: environment accessors, logging,
//! the standard HTTP middleware stack and shutdown handling.

pub mod env;
pub mod error;
pub mod middleware;
pub mod shutdown;
pub mod tracing;
