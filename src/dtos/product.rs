// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use super::lenient;

use crate::models::product::{Product, ProductListing};
use crate::models::vendor::VendorContact;

pub const DEFAULT_STATUS: &str = "active";

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default, deserialize_with = "lenient::number")]
    pub vendor_id: Option<i64>,
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl CreateProductRequest {
    pub fn stock_or_default(&self) -> i64 {
        self.stock.unwrap_or(0)
    }

    pub fn status_or_default(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STATUS)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    #[serde(flatten)]
    pub vendor: Option<VendorContact>,
    pub images: Vec<String>,
}

impl From<ProductListing> for ProductResponse {
    fn from(listing: ProductListing) -> Self {
        Self {
            product: listing.product,
            vendor: listing.vendor,
            images: listing.images,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageUploadResponse {
    pub message: &'static str,
    pub count: usize,
    pub images: Vec<String>,
}
