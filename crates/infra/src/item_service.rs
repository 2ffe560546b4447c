//! Request handling core: the five item operations over an [`ItemStore`].
//!
//! Every operation is a single check-then-act step. Existence checks run before any
//! mutation, so a failed operation never leaves a partial write behind.

use std::sync::{Mutex, MutexGuard, PoisonError};

use itemstore_core::{DomainError, DomainResult, ItemId};
use itemstore_items::{Item, ItemPatch};

use crate::store::ItemStore;

/// Item operations with the existence rules the HTTP surface exposes.
///
/// Mutating operations hold a single write gate for their whole check-then-act step,
/// so two requests racing on the same identifier serialize and the last one to take
/// the gate wins. Reads go straight to the store.
#[derive(Debug)]
pub struct ItemService<S> {
    store: S,
    write_gate: Mutex<()>,
}

impl<S> ItemService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> ItemService<S>
where
    S: ItemStore,
{
    /// Store `item` under a new identifier.
    ///
    /// Fails with `AlreadyExists` if `id` is taken; the stored item is left untouched.
    pub fn create(&self, id: ItemId, item: Item) -> DomainResult<Item> {
        let _gate = self.lock_writes();
        if self.store.exists(id) {
            tracing::debug!(item_id = %id, "create rejected: item already exists");
            return Err(DomainError::already_exists());
        }

        self.store.put(id, item.clone());
        tracing::info!(item_id = %id, "item created");
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> DomainResult<Item> {
        match self.store.get(id) {
            Some(item) => {
                tracing::debug!(item_id = %id, "item fetched");
                Ok(item)
            }
            None => {
                tracing::debug!(item_id = %id, "item not found");
                Err(DomainError::not_found())
            }
        }
    }

    /// Replace the whole record. Nothing from the previous value is kept.
    pub fn update(&self, id: ItemId, item: Item) -> DomainResult<Item> {
        let _gate = self.lock_writes();
        if !self.store.exists(id) {
            tracing::debug!(item_id = %id, "update rejected: item not found");
            return Err(DomainError::not_found());
        }

        self.store.put(id, item.clone());
        tracing::info!(item_id = %id, "item updated");
        Ok(item)
    }

    /// Merge `patch` onto the stored item and store the validated result.
    pub fn patch(&self, id: ItemId, patch: &ItemPatch) -> DomainResult<Item> {
        let _gate = self.lock_writes();
        let current = self.store.get(id).ok_or_else(|| {
            tracing::debug!(item_id = %id, "patch rejected: item not found");
            DomainError::not_found()
        })?;

        let merged = patch.apply_to(&current).inspect_err(|e| {
            tracing::debug!(item_id = %id, error = %e, "patch rejected");
        })?;

        self.store.put(id, merged.clone());
        let fields: Vec<&str> = patch.field_names().collect();
        tracing::info!(item_id = %id, fields = ?fields, "item partially updated");
        Ok(merged)
    }

    pub fn delete(&self, id: ItemId) -> DomainResult<()> {
        let _gate = self.lock_writes();
        if !self.store.exists(id) {
            tracing::debug!(item_id = %id, "delete rejected: item not found");
            return Err(DomainError::not_found());
        }

        self.store.remove(id);
        tracing::info!(item_id = %id, "item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::store::InMemoryItemStore;

    fn id(n: u64) -> ItemId {
        ItemId::new(n).unwrap()
    }

    fn pen() -> Item {
        Item::new("Pen", "Blue pen", 1.5).unwrap()
    }

    fn service() -> ItemService<InMemoryItemStore> {
        ItemService::new(InMemoryItemStore::new())
    }

    #[test]
    fn create_then_get_returns_created_item() {
        let svc = service();
        assert_eq!(svc.create(id(1), pen()).unwrap(), pen());
        assert_eq!(svc.get(id(1)).unwrap(), pen());
    }

    #[test]
    fn second_create_fails_and_keeps_first_item() {
        let svc = service();
        svc.create(id(1), pen()).unwrap();

        let other = Item::new("Mug", "Coffee mug", 8.0).unwrap();
        assert_eq!(svc.create(id(1), other).unwrap_err(), DomainError::AlreadyExists);
        assert_eq!(svc.get(id(1)).unwrap(), pen());
    }

    #[test]
    fn operations_on_absent_id_fail_with_not_found_and_leave_store_unchanged() {
        let svc = service();
        svc.create(id(1), pen()).unwrap();

        assert_eq!(svc.get(id(2)).unwrap_err(), DomainError::NotFound);
        assert_eq!(svc.update(id(2), pen()).unwrap_err(), DomainError::NotFound);
        assert_eq!(
            svc.patch(id(2), &ItemPatch::new().set("price", 2.0)).unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(svc.delete(id(2)).unwrap_err(), DomainError::NotFound);

        assert_eq!(svc.store().len(), 1);
        assert!(!svc.store().exists(id(2)));
        assert_eq!(svc.get(id(1)).unwrap(), pen());
    }

    #[test]
    fn update_replaces_whole_record() {
        let svc = service();
        svc.create(id(1), pen()).unwrap();

        let replacement = Item::new("Pencil", "HB pencil", 0.5).unwrap();
        assert_eq!(svc.update(id(1), replacement.clone()).unwrap(), replacement);
        assert_eq!(svc.get(id(1)).unwrap(), replacement);
    }

    #[test]
    fn patch_price_changes_only_price() {
        let svc = service();
        svc.create(id(1), pen()).unwrap();

        let patched = svc.patch(id(1), &ItemPatch::new().set("price", 9.99)).unwrap();
        assert_eq!(patched, Item::new("Pen", "Blue pen", 9.99).unwrap());
        assert_eq!(svc.get(id(1)).unwrap(), patched);
    }

    #[test]
    fn invalid_patch_leaves_item_untouched() {
        let svc = service();
        svc.create(id(1), pen()).unwrap();

        let err = svc
            .patch(id(1), &ItemPatch::new().set("price", "free"))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = svc
            .patch(id(1), &ItemPatch::new().set("price", 3.0).set("stock", 4))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert_eq!(svc.get(id(1)).unwrap(), pen());
    }

    #[test]
    fn delete_then_get_fails_with_not_found() {
        let svc = service();
        svc.create(id(1), pen()).unwrap();

        svc.delete(id(1)).unwrap();
        assert_eq!(svc.get(id(1)).unwrap_err(), DomainError::NotFound);
        assert!(svc.store().is_empty());
    }

    #[test]
    fn worked_example_lifecycle() {
        let svc = service();
        svc.create(id(1), pen()).unwrap();

        let patched = svc.patch(id(1), &ItemPatch::new().set("price", 2.0)).unwrap();
        assert_eq!(patched, Item::new("Pen", "Blue pen", 2.0).unwrap());

        svc.delete(id(1)).unwrap();
        assert_eq!(svc.get(id(1)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn concurrent_creates_on_same_id_admit_exactly_one() {
        let svc = Arc::new(service());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let svc = Arc::clone(&svc);
                thread::spawn(move || {
                    let item = Item::new(format!("item-{n}"), "racer", n as f64).unwrap();
                    svc.create(id(42), item).is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(svc.store().len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: create followed by get returns the created item unchanged.
            #[test]
            fn create_get_round_trip(
                raw_id in 1u64..=u64::MAX,
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                description in "[A-Za-z0-9 ,.]{0,80}",
                price in -1.0e9f64..1.0e9,
            ) {
                let svc = service();
                let item = Item::new(name, description, price).unwrap();
                let item_id = ItemId::new(raw_id).unwrap();

                svc.create(item_id, item.clone()).unwrap();
                prop_assert_eq!(svc.get(item_id).unwrap(), item);
            }
        }
    }
}
