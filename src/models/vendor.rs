use serde::Serialize;
use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Debug, FromRow, Serialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub phone: String,
    pub location: String,
    pub description: Option<String>,
    pub facebook: Option<String>,
    pub email: Option<String>,
    #[serde(serialize_with = "super::sqlite_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "super::sqlite_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Vendor columns joined onto product and service listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VendorContact {
    pub vendor_name: Option<String>,
    pub vendor_phone: Option<String>,
    pub vendor_location: Option<String>,
}
