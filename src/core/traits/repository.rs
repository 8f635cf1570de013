use async_trait::async_trait;

use crate::core::Result;

/// Base trait for repositories whose rows are identified by a natural key.
///
/// `upsert` must replace the row holding the same key instead of inserting a
/// second one; adapters enforce this with a unique constraint or an
/// equivalent compare-and-swap.
#[async_trait]
pub trait KeyedRepository<T, K>: Send + Sync
where
    T: Send + Sync + 'static,
    K: Send + Sync + 'static,
{
    /// Find the entity stored under `key`
    async fn find_by_key(&self, key: &K) -> Result<Option<T>>;

    /// Insert the entity, or replace the one stored under the same key
    async fn upsert(&self, entity: &T) -> Result<()>;
}
