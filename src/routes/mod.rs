/// Application routes configuration
use crate::handlers::{get_moon_phase, health, AppState};
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Landing page served for `/`
pub const INDEX_DOCUMENT: &str = "moon.html";

/// Build the application router with all routes
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Moon phase API
        .route("/api/moon-phase", get(get_moon_phase))
        // Static page and assets
        .route_service("/", ServeFile::new(static_dir.join(INDEX_DOCUMENT)))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
