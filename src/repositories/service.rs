use sqlx::SqlitePool;

use crate::dtos::service::{CreateServiceRequest, UpdateServiceRequest};
use crate::models::service::{Service, ServiceWithVendor};

pub async fn create(
    pool: &SqlitePool,
    req: &CreateServiceRequest,
    image_url: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO services (vendor_id, name, category, price, duration, description, image_url)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(req.vendor_id)
    .bind(&req.name)
    .bind(&req.category)
    .bind(req.price)
    .bind(req.duration.unwrap_or(0))
    .bind(&req.description)
    .bind(image_url)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<ServiceWithVendor>, sqlx::Error> {
    sqlx::query_as::<_, ServiceWithVendor>(
        "SELECT s.id, s.vendor_id, s.name, s.category, s.price, s.duration, s.description, s.image_url,
                s.created_at, s.updated_at,
                v.name AS vendor_name, v.phone AS vendor_phone, v.location AS vendor_location
         FROM services s
         LEFT JOIN vendors v ON s.vendor_id = v.id
         ORDER BY s.created_at DESC, s.id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_vendor(pool: &SqlitePool, vendor_id: i64) -> Result<Vec<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        "SELECT id, vendor_id, name, category, price, duration, description, image_url, created_at, updated_at
         FROM services
         WHERE vendor_id = ?
         ORDER BY created_at DESC, id DESC",
    )
    .bind(vendor_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        "SELECT id, vendor_id, name, category, price, duration, description, image_url, created_at, updated_at
         FROM services
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

// The image is left untouched; it can only be set when the service is created.
pub async fn update(pool: &SqlitePool, id: i64, req: &UpdateServiceRequest) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE services
         SET name = ?, category = ?, price = ?, duration = ?, description = ?,
             updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
    )
    .bind(&req.name)
    .bind(&req.category)
    .bind(req.price)
    .bind(req.duration)
    .bind(&req.description)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM services WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
