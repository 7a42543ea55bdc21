use crate::{
    models::{ErrorResponse, Item},
    store::SharedInventory,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

/// Create a new item under a caller-assigned ID
pub async fn create_item(
    State(inventory): State<SharedInventory>,
    Path(item_id): Path<u32>,
    Json(item): Json<Item>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    match inventory.insert(item_id, item) {
        Ok(stored) => {
            info!("Created item '{}'", item_id);
            Ok((StatusCode::OK, Json(stored)))
        }
        Err(e) => {
            error!("Failed to create item '{}': {}", item_id, e);
            let status = StatusCode::BAD_REQUEST;
            Err((
                status,
                Json(ErrorResponse {
                    code: status.as_u16(),
                    status: status.to_string(),
                    error: "Item ID already exists.".to_string(),
                }),
            ))
        }
    }
}
