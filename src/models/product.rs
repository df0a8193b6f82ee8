use serde::Serialize;
use sqlx::FromRow;
use chrono::NaiveDateTime;

use super::vendor::VendorContact;

#[derive(Debug, FromRow, Serialize)]
pub struct Product {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub status: Option<String>,
    #[serde(serialize_with = "super::sqlite_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "super::sqlite_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, FromRow)]
pub struct ProductWithVendor {
    #[sqlx(flatten)]
    pub product: Product,
    #[sqlx(flatten)]
    pub vendor: VendorContact,
}

#[derive(Debug, FromRow, Serialize)]
pub struct ProductImage {
    pub id: i64,
    pub product_id: i64,
    pub image_url: String,
    pub is_primary: bool,
    #[serde(serialize_with = "super::sqlite_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

/// A product with its image URLs in upload order, and the owning vendor's
/// contact details when the listing asked for them.
#[derive(Debug)]
pub struct ProductListing {
    pub product: Product,
    pub vendor: Option<VendorContact>,
    pub images: Vec<String>,
}
