use serde::Deserialize;

use itemstore_items::Item;

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `POST /items/`.
///
/// `item_id` stays raw text here so a missing or malformed value gets the
/// `invalid_id` error instead of a generic query rejection.
#[derive(Debug, Deserialize)]
pub struct CreateItemQuery {
    pub item_id: Option<String>,
}

// -------------------------
// Response messages
// -------------------------

pub const ITEM_CREATED: &str = "Item created";
pub const ITEM_UPDATED: &str = "Item updated";
pub const ITEM_PATCHED: &str = "Item partially updated";
pub const ITEM_DELETED: &str = "Item deleted successfully";

// -------------------------
// JSON mapping helpers
// -------------------------

// Items render through their own `Serialize` impl.

/// `{"item": ...}`
pub fn item_body(item: &Item) -> serde_json::Value {
    serde_json::json!({ "item": item })
}

/// `{"message": ..., "item": ...}`
pub fn message_with_item(message: &str, item: &Item) -> serde_json::Value {
    serde_json::json!({
        "message": message,
        "item": item,
    })
}

pub fn message_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "message": message })
}
