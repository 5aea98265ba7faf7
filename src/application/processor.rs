use crate::domain::points::PointsBreakdown;
use crate::domain::ports::{IdGeneratorBox, ReceiptStoreBox};
use crate::domain::receipt::Receipt;
use crate::error::Result;
use tracing::{debug, info};

/// Scores receipts and keeps the results for later lookup.
///
/// `ReceiptProcessor` owns the storage backend and the id generator. It is
/// shared across request handlers behind an `Arc`; the store does its own
/// locking.
pub struct ReceiptProcessor {
    store: ReceiptStoreBox,
    id_generator: IdGeneratorBox,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - The store for scored receipts.
    /// * `id_generator` - The source of identifiers for new receipts.
    pub fn new(store: ReceiptStoreBox, id_generator: IdGeneratorBox) -> Self {
        Self {
            store,
            id_generator,
        }
    }

    /// Scores a receipt, stores it under a fresh id and returns that id.
    pub async fn process(&self, receipt: Receipt) -> Result<String> {
        let breakdown = PointsBreakdown::for_receipt(&receipt);
        let points = breakdown.total();
        debug!(?breakdown, "Scored receipt");

        let id = self.id_generator.generate();
        self.store.put(id.clone(), receipt, points).await?;

        info!(%id, points, "Processed receipt");
        Ok(id)
    }

    /// Returns the points stored for `id`, if any.
    pub async fn points(&self, id: &str) -> Result<Option<u64>> {
        self.store.points(id).await
    }

    /// Returns the receipt stored for `id`, if any.
    pub async fn receipt(&self, id: &str) -> Result<Option<Receipt>> {
        self.store.receipt(id).await
    }
}
