use crate::{
    models::{ErrorResponse, Item, UpdateItem},
    store::SharedInventory,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

/// Apply a partial patch to an existing item. Fields omitted from the
/// body are preserved; fields present overwrite the stored values.
pub async fn update_item(
    State(inventory): State<SharedInventory>,
    Path(item_id): Path<u32>,
    Json(patch): Json<UpdateItem>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    match inventory.update(item_id, patch) {
        Ok(updated) => {
            info!("Updated item '{}'", item_id);
            Ok((StatusCode::OK, Json(updated)))
        }
        Err(e) => {
            error!("Failed to update item '{}': {}", item_id, e);
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
