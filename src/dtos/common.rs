use serde::Serialize;

/// Body returned by every create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
}

/// Body returned by update and delete endpoints; `changes` is the affected row count.
#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub message: &'static str,
    pub changes: u64,
}
