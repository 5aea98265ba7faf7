use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Entries {
    receipts: HashMap<String, Receipt>,
    points: HashMap<String, u64>,
}

/// A thread-safe in-memory store for scored receipts.
///
/// Both maps sit behind one `RwLock`, so a `put` is observed by readers as a
/// single step. Nothing is evicted and nothing survives a restart.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    entries: Arc<RwLock<Entries>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, id: String, receipt: Receipt, points: u64) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.points.insert(id.clone(), points);
        entries.receipts.insert(id, receipt);
        Ok(())
    }

    async fn points(&self, id: &str) -> Result<Option<u64>> {
        let entries = self.entries.read().await;
        Ok(entries.points.get(id).copied())
    }

    async fn receipt(&self, id: &str) -> Result<Option<Receipt>> {
        let entries = self.entries.read().await;
        Ok(entries.receipts.get(id).cloned())
    }
}
