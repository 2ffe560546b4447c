//! Items domain module.
//!
//! This crate contains the item record and the partial-update merge rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod patch;

pub use item::{ITEM_FIELDS, Item};
pub use patch::ItemPatch;
