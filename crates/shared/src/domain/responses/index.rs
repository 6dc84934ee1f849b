use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct IndexResponse {
    pub authenticated: bool,
    pub username: Option<String>,
    pub groups: Vec<String>,
    /// Present only for authenticated callers.
    pub product_count: Option<i64>,
}
