use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned after deleting an item
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeleteItemResponse {
    /// Human-readable confirmation naming the deleted ID
    #[serde(rename = "Success")]
    pub success: String,
}
