//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    decrement_handler, delete_handler, get_handler, health_handler, increment_handler,
    set_handler, stats_handler, AppState,
};
use crate::cache::MAX_VALUE_SIZE;

/// Largest accepted request body.
///
/// JSON escapes a control character as `\u00XX`, so a value at
/// [`MAX_VALUE_SIZE`] can take six bytes per value byte on the wire.
/// The slack covers the key and the surrounding object.
pub const MAX_BODY_SIZE: usize = 6 * MAX_VALUE_SIZE + 64 * 1024;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Body limit: [`MAX_BODY_SIZE`], so size checks happen in the handlers
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache/get", post(get_handler))
        .route("/cache/set", post(set_handler))
        .route("/cache/delete", post(delete_handler))
        .route("/cache/increment", post(increment_handler))
        .route("/cache/decrement", post(decrement_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
