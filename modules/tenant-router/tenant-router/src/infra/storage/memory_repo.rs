use async_trait::async_trait;
use dashmap::DashMap;
use tenant_router_sdk::TenantRecord;

use crate::domain::repo::TenantRepository;

/// Process-local tenant storage.
#[derive(Default)]
pub struct InMemoryTenantRepository {
    records: DashMap<String, TenantRecord>,
}

impl InMemoryTenantRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn find_by_id(&self, tenant_id: &str) -> anyhow::Result<Option<TenantRecord>> {
        Ok(self.records.get(tenant_id).map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, record: TenantRecord) -> anyhow::Result<TenantRecord> {
        self.records.insert(record.tenant_id.clone(), record.clone());
        Ok(record)
    }

    async fn delete(&self, tenant_id: &str) -> anyhow::Result<bool> {
        Ok(self.records.remove(tenant_id).is_some())
    }
}
