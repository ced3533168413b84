//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};

/// Create the pricing service router.
///
/// # Arguments
/// * `config` - Server configuration; supplies the default fraction count
pub fn pricing_router(config: ServerConfig) -> Router {
    let state = Arc::new(AppState { config });

    Router::new()
        // Health
        .route("/", get(handlers::pricing_status))
        .route("/api/v1/health", get(handlers::health))
        // Pricing
        .route("/price_bond", post(handlers::price_bond))
        .with_state(state)
}

/// Create the recommendation service router.
pub fn recommendation_router() -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::recommendation_status))
        .route("/api/v1/health", get(handlers::health))
        // Portfolio
        .route("/score", post(handlers::score))
        .route("/recommend", post(handlers::recommend))
}
