//! Domain service for the tenant router.
//!
//! Facade over the [`TenantDirectory`] and the [`RequestRouter`], shared by the
//! REST handlers and the local client.

use std::sync::Arc;

use tenant_router_sdk::{RoutedResponse, TenantRecord};

use super::directory::TenantDirectory;
use super::error::DomainError;
use super::ports::{MetricsRecorder, UpstreamForwarder};
use super::repo::TenantRepository;
use super::router::RequestRouter;

pub struct Service {
    directory: TenantDirectory,
    router: RequestRouter,
}

impl Service {
    #[must_use]
    pub fn new(
        repo: Arc<dyn TenantRepository>,
        forwarder: Arc<dyn UpstreamForwarder>,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Self {
        let directory = TenantDirectory::new(repo);
        let router = RequestRouter::new(Arc::new(directory.clone()), forwarder, metrics);
        Self { directory, router }
    }

    /// # Errors
    /// See [`TenantDirectory::get`].
    pub async fn get_tenant(&self, tenant_id: &str) -> Result<TenantRecord, DomainError> {
        self.directory.get(tenant_id).await
    }

    /// # Errors
    /// See [`TenantDirectory::create`].
    pub async fn create_tenant(&self, record: TenantRecord) -> Result<TenantRecord, DomainError> {
        self.directory.create(record).await
    }

    /// # Errors
    /// See [`TenantDirectory::remove`].
    pub async fn remove_tenant(&self, tenant_id: &str) -> Result<(), DomainError> {
        self.directory.remove(tenant_id).await
    }

    /// # Errors
    /// See [`RequestRouter::route`].
    pub async fn route_request(&self, tenant_id: &str) -> Result<RoutedResponse, DomainError> {
        self.router.route(tenant_id).await
    }
}
