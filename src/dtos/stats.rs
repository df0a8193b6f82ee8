use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_vendors: i64,
    pub total_products: i64,
    pub active_products: i64,
    pub total_services: i64,
}
