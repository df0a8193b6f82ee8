pub mod vendors;
pub mod products;
pub mod services;
pub mod stats;

use std::path::Path;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;
use crate::uploads::PUBLIC_PREFIX;

/// Largest accepted request body, JSON or multipart.
pub const BODY_LIMIT: usize = 50 * 1024 * 1024;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(vendors::routes())
        .merge(products::routes())
        .merge(services::routes())
        .merge(stats::routes())
}

/// The full application: API under `/api`, uploaded files under `/uploads`, and
/// any other path served from `public_dir` (the web frontend).
pub fn create_app(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let uploads = ServeDir::new(state.uploads.dir());

    Router::new()
        .nest("/api", create_router())
        .route("/health", get(health_check))
        .nest_service(PUBLIC_PREFIX, uploads)
        .fallback_service(ServeDir::new(public_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
