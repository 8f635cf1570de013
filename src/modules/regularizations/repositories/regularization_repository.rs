use async_trait::async_trait;
use tracing::debug;

use crate::core::traits::KeyedRepository;
use crate::core::Result;
use crate::modules::regularizations::models::{RegularizationKey, RegularizationRecord};

/// Persistence port for regularization records
///
/// At most one record exists per `(lease_id, target_year)`. Adapters
/// implement `find_by_key` and `upsert`; the lookup-or-create contract is
/// provided on top of them.
#[async_trait]
pub trait RegularizationRepository:
    KeyedRepository<RegularizationRecord, RegularizationKey>
{
    /// Return the record stored for the lease and year, or a fresh unsaved
    /// one carrying a new identity
    async fn find_or_create(&self, lease_id: &str, target_year: i32) -> Result<RegularizationRecord> {
        let key = RegularizationKey::new(lease_id, target_year);

        match self.find_by_key(&key).await? {
            Some(existing) => {
                debug!(
                    lease_id,
                    target_year,
                    regularization_id = existing.id.as_str(),
                    "Reusing existing regularization"
                );
                Ok(existing)
            }
            None => {
                debug!(lease_id, target_year, "Starting new regularization");
                Ok(RegularizationRecord::new(lease_id, target_year))
            }
        }
    }

    /// Persist the record, replacing the one stored under the same key
    async fn save(&self, record: &RegularizationRecord) -> Result<()> {
        self.upsert(record).await
    }
}
