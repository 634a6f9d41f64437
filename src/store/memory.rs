use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{SnapshotStore, StoreKey};

/// In-process store shared between the writer (host app) and the surfaces.
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<StoreKey, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, key: StoreKey, value: impl Into<String>) {
        self.inner.write().insert(key, value.into());
    }

    pub fn remove(&self, key: StoreKey) -> Option<String> {
        self.inner.write().remove(&key)
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: StoreKey) -> Option<String> {
        self.inner.read().get(&key).cloned()
    }
}
