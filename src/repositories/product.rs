use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::dtos::product::{CreateProductRequest, UpdateProductRequest};
use crate::models::product::{Product, ProductImage, ProductListing, ProductWithVendor};

pub async fn create(pool: &SqlitePool, req: &CreateProductRequest) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO products (vendor_id, name, category, price, stock, description, status)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(req.vendor_id)
    .bind(&req.name)
    .bind(&req.category)
    .bind(req.price)
    .bind(req.stock_or_default())
    .bind(&req.description)
    .bind(req.status_or_default())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Inserts one image row per URL in a single transaction; the first URL becomes the primary image.
pub async fn add_images(
    pool: &SqlitePool,
    product_id: i64,
    urls: &[String],
) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for (index, url) in urls.iter().enumerate() {
        inserted += sqlx::query(
            "INSERT INTO product_images (product_id, image_url, is_primary) VALUES (?, ?, ?)",
        )
        .bind(product_id)
        .bind(url)
        .bind(index == 0)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

pub async fn find_images(pool: &SqlitePool, product_id: i64) -> Result<Vec<ProductImage>, sqlx::Error> {
    sqlx::query_as::<_, ProductImage>(
        "SELECT id, product_id, image_url, is_primary, created_at
         FROM product_images
         WHERE product_id = ?
         ORDER BY id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await
}

/// Every product, newest first, with vendor contact details and images.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<ProductListing>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProductWithVendor>(
        "SELECT p.id, p.vendor_id, p.name, p.category, p.price, p.stock, p.description, p.status,
                p.created_at, p.updated_at,
                v.name AS vendor_name, v.phone AS vendor_phone, v.location AS vendor_location
         FROM products p
         LEFT JOIN vendors v ON p.vendor_id = v.id
         ORDER BY p.created_at DESC, p.id DESC",
    )
    .fetch_all(pool)
    .await?;

    let image_rows = sqlx::query_as::<_, (i64, String)>(
        "SELECT product_id, image_url FROM product_images ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut images = group_images(image_rows);
    Ok(rows
        .into_iter()
        .map(|row| ProductListing {
            images: images.remove(&row.product.id).unwrap_or_default(),
            product: row.product,
            vendor: Some(row.vendor),
        })
        .collect())
}

pub async fn find_by_vendor(pool: &SqlitePool, vendor_id: i64) -> Result<Vec<ProductListing>, sqlx::Error> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, vendor_id, name, category, price, stock, description, status, created_at, updated_at
         FROM products
         WHERE vendor_id = ?
         ORDER BY created_at DESC, id DESC",
    )
    .bind(vendor_id)
    .fetch_all(pool)
    .await?;

    let image_rows = sqlx::query_as::<_, (i64, String)>(
        "SELECT pi.product_id, pi.image_url
         FROM product_images pi
         JOIN products p ON p.id = pi.product_id
         WHERE p.vendor_id = ?
         ORDER BY pi.id",
    )
    .bind(vendor_id)
    .fetch_all(pool)
    .await?;

    let mut images = group_images(image_rows);
    Ok(products
        .into_iter()
        .map(|product| ProductListing {
            images: images.remove(&product.id).unwrap_or_default(),
            product,
            vendor: None,
        })
        .collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ProductListing>, sqlx::Error> {
    let Some(product) = sqlx::query_as::<_, Product>(
        "SELECT id, vendor_id, name, category, price, stock, description, status, created_at, updated_at
         FROM products
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    else {
        return Ok(None);
    };

    let images = find_images(pool, id)
        .await?
        .into_iter()
        .map(|image| image.image_url)
        .collect();

    Ok(Some(ProductListing { product, vendor: None, images }))
}

pub async fn update(pool: &SqlitePool, id: i64, req: &UpdateProductRequest) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE products
         SET name = ?, category = ?, price = ?, stock = ?, description = ?, status = ?,
             updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
    )
    .bind(&req.name)
    .bind(&req.category)
    .bind(req.price)
    .bind(req.stock)
    .bind(&req.description)
    .bind(&req.status)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// Rows must arrive in image id order so each list keeps upload order.
fn group_images(rows: Vec<(i64, String)>) -> HashMap<i64, Vec<String>> {
    let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
    for (product_id, url) in rows {
        grouped.entry(product_id).or_default().push(url);
    }
    grouped
}
