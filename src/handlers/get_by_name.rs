use crate::{
    models::{ErrorResponse, Item},
    store::SharedInventory,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{debug, error};

#[derive(Debug, Deserialize)]
pub struct GetByNameQuery {
    /// Name of the item to look for
    pub name: String,
    /// Required by the wire contract but never used for the lookup
    pub test: i64,
}

/// Fetch the first item whose name matches the query exactly.
///
/// The path ID is part of the wire contract but plays no role in the
/// lookup; the scan runs over the whole inventory in ascending ID order.
pub async fn get_item_by_name(
    State(inventory): State<SharedInventory>,
    Path(_item_id): Path<u32>,
    Query(query): Query<GetByNameQuery>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    debug!("Looking up item by name '{}' (test={})", query.name, query.test);

    match inventory.find_by_name(&query.name) {
        Some(item) => Ok((StatusCode::OK, Json(item))),
        None => {
            error!("No item named '{}'", query.name);
            let status = StatusCode::NOT_FOUND;
            Err((
                status,
                Json(ErrorResponse {
                    code: status.as_u16(),
                    status: status.to_string(),
                    error: "Item name does not exist.".to_string(),
                }),
            ))
        }
    }
}
