use crate::{
    models::{ErrorResponse, Item},
    store::SharedInventory,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;

/// Fetch a single item by its ID
pub async fn get_item(
    State(inventory): State<SharedInventory>,
    Path(item_id): Path<u32>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    // IDs start at 1; the path extractor only guarantees a non-negative integer
    if item_id < 1 {
        let status = StatusCode::BAD_REQUEST;
        return Err((
            status,
            Json(ErrorResponse {
                code: status.as_u16(),
                status: status.to_string(),
                error: format!("Item ID must be greater than or equal to 1, got {}", item_id),
            }),
        ));
    }

    match inventory.get(item_id) {
        Some(item) => Ok((StatusCode::OK, Json(item))),
        None => {
            error!("Item '{}' not found", item_id);
            let status = StatusCode::NOT_FOUND;
            Err((
                status,
                Json(ErrorResponse {
                    code: status.as_u16(),
                    status: status.to_string(),
                    error: "Item ID does not exist.".to_string(),
                }),
            ))
        }
    }
}
