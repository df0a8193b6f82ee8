use axum::{routing::get, Router};

use crate::handlers::product::list_vendor_products;
use crate::handlers::service::list_vendor_services;
use crate::handlers::vendor::{create_vendor, delete_vendor, get_vendor, list_vendors, update_vendor};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/vendors", get(list_vendors).post(create_vendor))
        .route("/vendors/{id}", get(get_vendor).put(update_vendor).delete(delete_vendor))
        .route("/vendors/{id}/products", get(list_vendor_products))
        .route("/vendors/{id}/services", get(list_vendor_services))
}
