// src/handlers/product.rs
use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::instrument;

use crate::dtos::common::{ChangesResponse, CreatedResponse};
use crate::dtos::product::{
    CreateProductRequest, ImageUploadResponse, ProductResponse, UpdateProductRequest,
};
use crate::error::AppError;
use crate::handlers::{JsonBody, RowId};
use crate::repositories::product as product_repo;
use crate::state::AppState;
use crate::uploads::{UploadForm, MAX_FILES};

// POST /products - Create product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = product_repo::create(&state.db_pool, &payload).await?;
    tracing::info!(id, vendor_id = ?payload.vendor_id, "Product created");

    Ok(Json(CreatedResponse { id, message: "Product created successfully" }))
}

// POST /products/:id/images - Upload up to five images; the first becomes primary
#[instrument(skip(state, multipart))]
pub async fn upload_product_images(
    RowId(id): RowId,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImageUploadResponse>, AppError> {
    let id = id.ok_or_else(|| AppError::not_found("Product not found"))?;
    let form = UploadForm::read(multipart, "images", MAX_FILES).await?;
    let urls = state.uploads.store_batch(&form.files).await?;

    if let Err(e) = product_repo::add_images(&state.db_pool, id, &urls).await {
        state.uploads.discard_all(&urls).await;
        return Err(e.into());
    }

    Ok(Json(ImageUploadResponse {
        message: "Images uploaded successfully",
        count: urls.len(),
        images: urls,
    }))
}

// GET /products - List products with vendor contact and images
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = product_repo::find_all(&state.db_pool).await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// GET /vendors/:id/products - List one vendor's products with images
#[instrument(skip(state))]
pub async fn list_vendor_products(
    RowId(vendor_id): RowId,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = match vendor_id {
        Some(vendor_id) => product_repo::find_by_vendor(&state.db_pool, vendor_id).await?,
        None => Vec::new(),
    };
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// GET /products/:id - Get single product with images
#[instrument(skip(state))]
pub async fn get_product(
    RowId(id): RowId,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = match id {
        Some(id) => product_repo::find_by_id(&state.db_pool, id).await?,
        None => None,
    }
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// PUT /products/:id - Update product; a missing id reports zero changes
#[instrument(skip(state, payload))]
pub async fn update_product(
    RowId(id): RowId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> Result<Json<ChangesResponse>, AppError> {
    let changes = match id {
        Some(id) => product_repo::update(&state.db_pool, id, &payload).await?,
        None => 0,
    };

    Ok(Json(ChangesResponse { message: "Product updated successfully", changes }))
}

// DELETE /products/:id - Delete product and its images
#[instrument(skip(state))]
pub async fn delete_product(
    RowId(id): RowId,
    State(state): State<AppState>,
) -> Result<Json<ChangesResponse>, AppError> {
    let changes = match id {
        Some(id) => product_repo::delete(&state.db_pool, id).await?,
        None => 0,
    };

    Ok(Json(ChangesResponse { message: "Product deleted successfully", changes }))
}
