use crate::{
    models::{DeleteItemResponse, ErrorResponse},
    store::SharedInventory,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct DeleteItemQuery {
    /// The ID of the item to delete
    pub item_id: u32,
}

/// Delete an item. The ID travels as a query parameter, not a path
/// segment, to stay wire compatible with existing callers.
pub async fn delete_item(
    State(inventory): State<SharedInventory>,
    Query(query): Query<DeleteItemQuery>,
) -> Result<(StatusCode, Json<DeleteItemResponse>), (StatusCode, Json<ErrorResponse>)> {
    match inventory.remove(query.item_id) {
        Ok(()) => {
            info!("Deleted item '{}'", query.item_id);
            Ok((
                StatusCode::OK,
                Json(DeleteItemResponse {
                    success: format!("Item {} deleted!", query.item_id),
                }),
            ))
        }
        Err(e) => {
            error!("Failed to delete item '{}': {}", query.item_id, e);
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
