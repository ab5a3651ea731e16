//! Tenant directory: the source of truth for endpoint resolution.

use std::sync::Arc;

use async_trait::async_trait;
use tenant_router_sdk::TenantRecord;
use tracing::instrument;

use super::error::DomainError;
use super::ports::TenantLookup;
use super::repo::TenantRepository;

/// CRUD over tenant records with existence semantics.
#[derive(Clone)]
pub struct TenantDirectory {
    repo: Arc<dyn TenantRepository>,
}

impl TenantDirectory {
    #[must_use]
    pub fn new(repo: Arc<dyn TenantRepository>) -> Self {
        Self { repo }
    }

    /// Fetch the record for `tenant_id`.
    ///
    /// # Errors
    /// `TenantNotFound` if absent, `Storage` on backend failure.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn get(&self, tenant_id: &str) -> Result<TenantRecord, DomainError> {
        tracing::debug!("Fetching tenant record");
        self.repo
            .find_by_id(tenant_id)
            .await?
            .ok_or_else(|| DomainError::not_found(tenant_id))
    }

    /// Insert or fully replace a record. Last write wins.
    ///
    /// # Errors
    /// `Validation` if the tenant id is empty, `Storage` on backend failure.
    #[instrument(skip(self, record), fields(tenant_id = %record.tenant_id))]
    pub async fn create(&self, record: TenantRecord) -> Result<TenantRecord, DomainError> {
        if record.tenant_id.is_empty() {
            return Err(DomainError::validation("tenantId must not be empty"));
        }

        let saved = self.repo.upsert(record).await?;
        tracing::info!(
            endpoint = %saved.resource_endpoint,
            "Tenant registered"
        );
        Ok(saved)
    }

    /// Permanently delete a record.
    ///
    /// # Errors
    /// `TenantNotFound` if absent, `Storage` on backend failure.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn remove(&self, tenant_id: &str) -> Result<(), DomainError> {
        if !self.repo.delete(tenant_id).await? {
            return Err(DomainError::not_found(tenant_id));
        }
        tracing::info!("Tenant removed");
        Ok(())
    }
}

#[async_trait]
impl TenantLookup for TenantDirectory {
    async fn lookup(&self, tenant_id: &str) -> Result<TenantRecord, DomainError> {
        self.get(tenant_id).await
    }
}
