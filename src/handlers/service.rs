// src/handlers/service.rs
use axum::{
    extract::{FromRequest, Multipart, Request, State},
    Json,
};
use http::header::CONTENT_TYPE;
use tracing::instrument;

use crate::dtos::common::{ChangesResponse, CreatedResponse};
use crate::dtos::service::{CreateServiceRequest, UpdateServiceRequest};
use crate::error::AppError;
use crate::handlers::{JsonBody, RowId};
use crate::models::service::{Service, ServiceWithVendor};
use crate::repositories::service as service_repo;
use crate::state::AppState;
use crate::uploads::{UploadForm, UploadedFile};

// POST /services - Create service from JSON, or multipart with an optional `image` file
#[instrument(skip(state, request))]
pub async fn create_service(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CreatedResponse>, AppError> {
    let (payload, image) = if is_multipart(&request) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        read_service_form(multipart).await?
    } else {
        let JsonBody(payload) = JsonBody::<CreateServiceRequest>::from_request(request, &state).await?;
        (payload, None)
    };

    let image_url = match &image {
        Some(file) => Some(state.uploads.store(file).await?),
        None => None,
    };

    let id = match service_repo::create(&state.db_pool, &payload, image_url.as_deref()).await {
        Ok(id) => id,
        Err(e) => {
            if let Some(url) = &image_url {
                state.uploads.discard(url).await;
            }
            return Err(e.into());
        }
    };
    tracing::info!(id, vendor_id = ?payload.vendor_id, "Service created");

    Ok(Json(CreatedResponse { id, message: "Service created successfully" }))
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

async fn read_service_form(
    multipart: Multipart,
) -> Result<(CreateServiceRequest, Option<UploadedFile>), AppError> {
    let mut form = UploadForm::read(multipart, "image", 1).await?;

    let payload = CreateServiceRequest {
        vendor_id: form.parse_field("vendor_id")?,
        name: form.text("name").map(str::to_string),
        category: form.text("category").map(str::to_string),
        price: form.parse_field("price")?,
        duration: form.parse_field("duration")?,
        description: form.text("description").map(str::to_string),
    };

    Ok((payload, form.files.pop()))
}

// GET /services - List services with vendor contact
#[instrument(skip(state))]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceWithVendor>>, AppError> {
    let services = service_repo::find_all(&state.db_pool).await?;
    Ok(Json(services))
}

// GET /vendors/:id/services - List one vendor's services
#[instrument(skip(state))]
pub async fn list_vendor_services(
    RowId(vendor_id): RowId,
    State(state): State<AppState>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = match vendor_id {
        Some(vendor_id) => service_repo::find_by_vendor(&state.db_pool, vendor_id).await?,
        None => Vec::new(),
    };
    Ok(Json(services))
}

// GET /services/:id - Get single service
#[instrument(skip(state))]
pub async fn get_service(
    RowId(id): RowId,
    State(state): State<AppState>,
) -> Result<Json<Service>, AppError> {
    let service = match id {
        Some(id) => service_repo::find_by_id(&state.db_pool, id).await?,
        None => None,
    }
    .ok_or_else(|| AppError::not_found("Service not found"))?;

    Ok(Json(service))
}

// PUT /services/:id - Update service; a missing id reports zero changes
#[instrument(skip(state, payload))]
pub async fn update_service(
    RowId(id): RowId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateServiceRequest>,
) -> Result<Json<ChangesResponse>, AppError> {
    let changes = match id {
        Some(id) => service_repo::update(&state.db_pool, id, &payload).await?,
        None => 0,
    };

    Ok(Json(ChangesResponse { message: "Service updated successfully", changes }))
}

// DELETE /services/:id - Delete service
#[instrument(skip(state))]
pub async fn delete_service(
    RowId(id): RowId,
    State(state): State<AppState>,
) -> Result<Json<ChangesResponse>, AppError> {
    let changes = match id {
        Some(id) => service_repo::delete(&state.db_pool, id).await?,
        None => 0,
    };

    Ok(Json(ChangesResponse { message: "Service deleted successfully", changes }))
}
