use axum::{routing::get, Router};

use crate::handlers::stats::get_stats;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}
