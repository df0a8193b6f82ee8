// src/handlers/vendor.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::common::{ChangesResponse, CreatedResponse};
use crate::dtos::vendor::VendorRequest;
use crate::error::AppError;
use crate::handlers::{JsonBody, RowId};
use crate::models::vendor::Vendor;
use crate::repositories::vendor as vendor_repo;
use crate::state::AppState;

// POST /vendors - Create vendor
#[instrument(skip(state, payload))]
pub async fn create_vendor(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VendorRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = vendor_repo::create(&state.db_pool, &payload).await?;
    tracing::info!(id, "Vendor created");

    Ok(Json(CreatedResponse { id, message: "Vendor created successfully" }))
}

// GET /vendors - List vendors, newest first
#[instrument(skip(state))]
pub async fn list_vendors(State(state): State<AppState>) -> Result<Json<Vec<Vendor>>, AppError> {
    let vendors = vendor_repo::find_all(&state.db_pool).await?;
    Ok(Json(vendors))
}

// GET /vendors/:id - Get single vendor
#[instrument(skip(state))]
pub async fn get_vendor(
    RowId(id): RowId,
    State(state): State<AppState>,
) -> Result<Json<Vendor>, AppError> {
    let vendor = match id {
        Some(id) => vendor_repo::find_by_id(&state.db_pool, id).await?,
        None => None,
    }
    .ok_or_else(|| AppError::not_found("Vendor not found"))?;

    Ok(Json(vendor))
}

// PUT /vendors/:id - Update vendor; a missing id reports zero changes
#[instrument(skip(state, payload))]
pub async fn update_vendor(
    RowId(id): RowId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VendorRequest>,
) -> Result<Json<ChangesResponse>, AppError> {
    let changes = match id {
        Some(id) => vendor_repo::update(&state.db_pool, id, &payload).await?,
        None => 0,
    };

    Ok(Json(ChangesResponse { message: "Vendor updated successfully", changes }))
}

// DELETE /vendors/:id - Delete vendor with its products and services
#[instrument(skip(state))]
pub async fn delete_vendor(
    RowId(id): RowId,
    State(state): State<AppState>,
) -> Result<Json<ChangesResponse>, AppError> {
    let changes = match id {
        Some(id) => vendor_repo::delete(&state.db_pool, id).await?,
        None => 0,
    };
    tracing::info!(?id, changes, "Vendor deleted");

    Ok(Json(ChangesResponse { message: "Vendor deleted successfully", changes }))
}
