use sqlx::SqlitePool;

use crate::dtos::vendor::VendorRequest;
use crate::models::vendor::Vendor;

pub async fn create(pool: &SqlitePool, req: &VendorRequest) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO vendors (name, category, phone, location, description, facebook, email)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&req.name)
    .bind(&req.category)
    .bind(&req.phone)
    .bind(&req.location)
    .bind(&req.description)
    .bind(&req.facebook)
    .bind(&req.email)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Vendor>, sqlx::Error> {
    sqlx::query_as::<_, Vendor>(
        "SELECT id, name, category, phone, location, description, facebook, email, created_at, updated_at
         FROM vendors
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Vendor>, sqlx::Error> {
    sqlx::query_as::<_, Vendor>(
        "SELECT id, name, category, phone, location, description, facebook, email, created_at, updated_at
         FROM vendors
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update(pool: &SqlitePool, id: i64, req: &VendorRequest) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE vendors
         SET name = ?, category = ?, phone = ?, location = ?, description = ?, facebook = ?, email = ?,
             updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
    )
    .bind(&req.name)
    .bind(&req.category)
    .bind(&req.phone)
    .bind(&req.location)
    .bind(&req.description)
    .bind(&req.facebook)
    .bind(&req.email)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Products and services of the vendor go with it (ON DELETE CASCADE).
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM vendors WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
