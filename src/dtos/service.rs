use serde::Deserialize;

use super::lenient;

#[derive(Debug, Default, Deserialize)]
pub struct CreateServiceRequest {
    #[serde(default, deserialize_with = "lenient::number")]
    pub vendor_id: Option<i64>,
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration: Option<i64>,
    pub description: Option<String>,
}
