//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing).

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The map frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/settlements", get(handlers::list_settlements))
        .route("/settlements/{name}", get(handlers::get_settlement))
        .route("/transport/{name}", get(handlers::get_transport))
        .route("/classify", get(handlers::classify))
        .route("/markers", get(handlers::get_markers))
        .route("/legend", get(handlers::get_legend))
        .route("/geojson", get(handlers::get_geojson))
        .route("/stats", get(handlers::get_stats))
        .route("/metadata", get(handlers::get_metadata));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
