// src/state.rs
use sqlx::SqlitePool;

use crate::uploads::UploadStore;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, uploads: UploadStore) -> Self {
        Self { db_pool, uploads }
    }
}
