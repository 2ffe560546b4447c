use axum::{
    routing::{get, post},
    Router,
};

pub mod items;
pub mod system;

/// Router for the item endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/items", post(items::create_item))
        .route("/items/", post(items::create_item))
        .route(
            "/items/:item_id",
            get(items::get_item)
                .put(items::update_item)
                .patch(items::patch_item)
                .delete(items::delete_item),
        )
}
