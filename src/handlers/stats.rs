// src/handlers/stats.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::stats::StatsResponse;
use crate::error::AppError;
use crate::repositories::stats;
use crate::state::AppState;

// GET /stats - Dashboard counts; the four queries are independent and run together
#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let pool = &state.db_pool;
    let (total_vendors, total_products, active_products, total_services) = tokio::try_join!(
        stats::count_vendors(pool),
        stats::count_products(pool),
        stats::count_active_products(pool),
        stats::count_services(pool),
    )?;

    Ok(Json(StatsResponse {
        total_vendors,
        total_products,
        active_products,
        total_services,
    }))
}
