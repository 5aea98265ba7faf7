use super::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for scored receipts.
///
/// Both the receipt and its points live under the same identifier and must
/// become visible together.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt and its points, replacing any entry with the same id.
    async fn put(&self, id: String, receipt: Receipt, points: u64) -> Result<()>;
    async fn points(&self, id: &str) -> Result<Option<u64>>;
    async fn receipt(&self, id: &str) -> Result<Option<Receipt>>;
}

/// Produces identifiers for newly submitted receipts.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
pub type IdGeneratorBox = Box<dyn IdGenerator>;
