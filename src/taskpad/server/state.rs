use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::TodoStore;

/// Shared state for all HTTP handlers.
///
/// The store sits behind an `RwLock`: list handlers take the read lock and
/// may overlap each other, mutations take the write lock and run alone.
/// Cloning is cheap (one `Arc`), which is how axum hands state to handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<TodoStore>>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn store(&self) -> RwLockReadGuard<'_, TodoStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn store_mut(&self) -> RwLockWriteGuard<'_, TodoStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}
