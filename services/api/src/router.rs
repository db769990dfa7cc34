use std::sync::Arc;

use axum::Router;

use pulse_core::error::AppError;
use pulse_core::middleware::standard_layers;

use crate::config::PulseConfig;

/// Shared state handed to every handler via axum `State`.
pub type AppState = Arc<PulseConfig>;

async fn not_found() -> AppError {
    AppError::NotFound
}

/// The api has no routes yet; every path answers with a JSON 404 behind the
/// standard middleware stack.
pub fn build_router(config: AppState) -> Router {
    standard_layers(Router::new().fallback(not_found).with_state(config))
}
