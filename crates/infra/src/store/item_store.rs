use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use itemstore_core::ItemId;
use itemstore_items::Item;

/// Key/value store abstraction for items.
///
/// Plain mapping semantics with no validation: callers enforce existence-based rules.
pub trait ItemStore: Send + Sync {
    fn exists(&self, id: ItemId) -> bool;
    fn get(&self, id: ItemId) -> Option<Item>;
    /// Insert or overwrite unconditionally.
    fn put(&self, id: ItemId, item: Item);
    /// Remove the entry if present.
    fn remove(&self, id: ItemId);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn exists(&self, id: ItemId) -> bool {
        (**self).exists(id)
    }

    fn get(&self, id: ItemId) -> Option<Item> {
        (**self).get(id)
    }

    fn put(&self, id: ItemId, item: Item) {
        (**self).put(id, item)
    }

    fn remove(&self, id: ItemId) {
        (**self).remove(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Process-memory item store. No eviction, no expiry, nothing survives a restart.
///
/// Writers take the exclusive lock, so `put` and `remove` are atomic with respect to
/// each other. A poisoned lock is recovered: every write leaves the map consistent.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn exists(&self, id: ItemId) -> bool {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.contains_key(&id)
    }

    fn get(&self, id: ItemId) -> Option<Item> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&id).cloned()
    }

    fn put(&self, id: ItemId, item: Item) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(id, item);
    }

    fn remove(&self, id: ItemId) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(&id);
    }

    fn len(&self) -> usize {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.len()
    }
}
