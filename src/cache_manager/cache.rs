use super::{BlockSummary, CacheSnapshot, MempoolEntry};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the latest published snapshot.
///
/// Writers build a complete `CacheSnapshot` before calling `replace`, so readers
/// only ever observe a whole snapshot: the previous one or the new one.
#[derive(Clone, Debug, Default)]
pub struct ExplorerCache {
    current: Arc<RwLock<Arc<CacheSnapshot>>>,
}

impl ExplorerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<CacheSnapshot> {
        // a panic while holding the lock can't leave a partial snapshot behind
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    pub fn replace(&self, snapshot: CacheSnapshot) {
        let snapshot = Arc::new(snapshot);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = snapshot;
    }

    pub fn blocks(&self) -> Vec<BlockSummary> {
        self.snapshot().blocks.clone()
    }

    pub fn mempool(&self) -> Vec<MempoolEntry> {
        self.snapshot().mempool.clone()
    }
}
