//! Repository trait for tenant records.

use async_trait::async_trait;
use tenant_router_sdk::TenantRecord;

/// Storage of tenant records keyed by tenant id.
///
/// Implementations must give read-after-write consistency per key.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Find a record by tenant id.
    async fn find_by_id(&self, tenant_id: &str) -> anyhow::Result<Option<TenantRecord>>;

    /// Insert the record or fully replace the one with the same tenant id.
    async fn upsert(&self, record: TenantRecord) -> anyhow::Result<TenantRecord>;

    /// Delete a record. Returns `false` when nothing was deleted.
    async fn delete(&self, tenant_id: &str) -> anyhow::Result<bool>;
}
