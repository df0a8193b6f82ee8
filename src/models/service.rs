use serde::Serialize;
use sqlx::FromRow;
use chrono::NaiveDateTime;

use super::vendor::VendorContact;

#[derive(Debug, FromRow, Serialize)]
pub struct Service {
    pub id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub duration: Option<i64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(serialize_with = "super::sqlite_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "super::sqlite_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, FromRow, Serialize)]
pub struct ServiceWithVendor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub service: Service,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub vendor: VendorContact,
}
