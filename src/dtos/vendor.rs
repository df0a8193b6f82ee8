use serde::Deserialize;

// Used for both create and update; absent fields are written as NULL.
#[derive(Debug, Default, Deserialize)]
pub struct VendorRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub facebook: Option<String>,
    pub email: Option<String>,
}
