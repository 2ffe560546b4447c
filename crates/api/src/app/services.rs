use std::sync::Arc;

use itemstore_infra::{InMemoryItemStore, ItemService};

/// Item service over the shared in-memory store.
pub type InMemoryItemService = ItemService<Arc<InMemoryItemStore>>;

/// Everything the handlers need, shared across requests behind an `Arc`.
#[derive(Debug)]
pub struct AppServices {
    items: InMemoryItemService,
}

impl AppServices {
    pub fn new(store: Arc<InMemoryItemStore>) -> Self {
        Self {
            items: ItemService::new(store),
        }
    }

    pub fn items(&self) -> &InMemoryItemService {
        &self.items
    }
}

/// In-memory wiring: the only backend this service has.
pub fn build_services() -> AppServices {
    tracing::debug!("wiring in-memory item store");
    AppServices::new(Arc::new(InMemoryItemStore::new()))
}
