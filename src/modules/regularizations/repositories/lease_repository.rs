use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::Result;
use crate::modules::regularizations::models::{LeaseRecord, ReceiptRecord};

/// Read port over leases and the rent receipts issued for them
#[async_trait]
pub trait LeaseRepository: Send + Sync {
    /// Find a lease by ID
    async fn find_lease(&self, lease_id: &str) -> Result<Option<LeaseRecord>>;

    /// Receipts of a lease whose coverage starts within `[from, to]`
    async fn find_receipts(
        &self,
        lease_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ReceiptRecord>>;
}
