use crate::{
    handlers::{
        create_item, delete_item, get_item, get_item_by_name, health_check, ready_check,
        update_item,
    },
    store::SharedInventory,
};
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Create API routes
pub fn create_api_routes(inventory: SharedInventory) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .route("/get-item/:item_id", get(get_item))
        .route("/get-by-name/:item_id", get(get_item_by_name))
        .route("/create-item/:item_id", post(create_item))
        .route("/update-item/:item_id", put(update_item))
        .route("/delete-item", delete(delete_item))
        .with_state(inventory)
}
