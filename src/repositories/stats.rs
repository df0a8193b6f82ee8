use sqlx::SqlitePool;

use crate::dtos::product::DEFAULT_STATUS;

pub async fn count_vendors(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM vendors").fetch_one(pool).await
}

pub async fn count_products(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products").fetch_one(pool).await
}

pub async fn count_active_products(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE status = ?")
        .bind(DEFAULT_STATUS)
        .fetch_one(pool)
        .await
}

pub async fn count_services(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM services").fetch_one(pool).await
}
