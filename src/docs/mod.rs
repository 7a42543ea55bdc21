use crate::models::*;
use utoipa::OpenApi;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Fetch an item by ID
#[utoipa::path(
    get,
    path = "/get-item/{item_id}",
    params(
        ("item_id" = u32, Path, description = "The ID of the item you would like to view", minimum = 1)
    ),
    responses(
        (status = 200, description = "The stored item", body = Item),
        (status = 404, description = "Item ID does not exist", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_item_doc() {}

/// Fetch the first item with a matching name
#[utoipa::path(
    get,
    path = "/get-by-name/{item_id}",
    params(
        ("item_id" = u32, Path, description = "Accepted for wire compatibility; not used for the lookup"),
        ("name" = String, Query, description = "Name of item"),
        ("test" = i64, Query, description = "Accepted for wire compatibility; not used")
    ),
    responses(
        (status = 200, description = "The first matching item in ascending ID order", body = Item),
        (status = 404, description = "Item name does not exist", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_item_by_name_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/create-item/{item_id}",
    params(
        ("item_id" = u32, Path, description = "Caller-assigned ID for the new item")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "The created item", body = Item),
        (status = 400, description = "Item ID already exists", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Partially update an existing item
#[utoipa::path(
    put,
    path = "/update-item/{item_id}",
    params(
        ("item_id" = u32, Path, description = "The ID of the item to update")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 404, description = "Item ID does not exist", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn update_item_doc() {}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/delete-item",
    params(
        ("item_id" = u32, Query, description = "The ID of the item we are going to delete")
    ),
    responses(
        (status = 200, description = "Confirmation naming the deleted ID", body = DeleteItemResponse),
        (status = 404, description = "Item ID does not exist", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn delete_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        get_item_doc,
        get_item_by_name_doc,
        create_item_doc,
        update_item_doc,
        delete_item_doc,
    ),
    components(
        schemas(HealthResponse, Item, UpdateItem, DeleteItemResponse, ErrorResponse)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
