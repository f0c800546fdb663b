// Item handlers. Nothing is stored yet; both endpoints answer with a fixed message.

use axum::{body::Bytes, http::StatusCode, Json};
use tracing::{info, instrument};

use crate::api::response::MessageResponse;

pub const LIST_ITEMS_MESSAGE: &str = "Get all items";
pub const CREATE_ITEM_MESSAGE: &str = "Item created";

/// Lists items
#[instrument]
pub async fn list_items_handler() -> (StatusCode, Json<MessageResponse>) {
    info!("List items endpoint called");

    (StatusCode::OK, Json(MessageResponse::new(LIST_ITEMS_MESSAGE)))
}

/// Creates an item. The body is read so size limits apply, but never parsed.
#[instrument(skip(body), fields(body_len = body.len()))]
pub async fn create_item_handler(body: Bytes) -> (StatusCode, Json<MessageResponse>) {
    info!("Create item endpoint called");

    (StatusCode::CREATED, Json(MessageResponse::new(CREATE_ITEM_MESSAGE)))
}
