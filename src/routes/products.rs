use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::product::{
    create_product, delete_product, get_product, list_products, update_product,
    upload_product_images,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product).put(update_product).delete(delete_product))
        .route("/products/{id}/images", post(upload_product_images))
}
