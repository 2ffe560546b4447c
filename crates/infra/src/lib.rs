//! Infrastructure layer: item storage and the request-handling core built on it.

pub mod item_service;
pub mod store;

pub use item_service::ItemService;
pub use store::{InMemoryItemStore, ItemStore};
