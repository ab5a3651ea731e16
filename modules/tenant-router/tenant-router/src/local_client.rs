//! Local client adapter implementing the SDK API trait.
//!
//! Bridges the domain service to [`TenantRouterClient`] so in-process callers
//! can route without going through HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use tenant_router_sdk::{RoutedResponse, TenantRecord, TenantRouterClient, TenantRouterError};

use crate::domain::service::Service;

pub struct TenantRouterLocalClient {
    service: Arc<Service>,
}

impl TenantRouterLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TenantRouterClient for TenantRouterLocalClient {
    async fn get_tenant(&self, tenant_id: &str) -> Result<TenantRecord, TenantRouterError> {
        self.service.get_tenant(tenant_id).await.map_err(Into::into)
    }

    async fn create_tenant(
        &self,
        record: TenantRecord,
    ) -> Result<TenantRecord, TenantRouterError> {
        self.service.create_tenant(record).await.map_err(Into::into)
    }

    async fn remove_tenant(&self, tenant_id: &str) -> Result<(), TenantRouterError> {
        self.service.remove_tenant(tenant_id).await.map_err(Into::into)
    }

    async fn route_request(&self, tenant_id: &str) -> Result<RoutedResponse, TenantRouterError> {
        self.service
            .route_request(tenant_id)
            .await
            .map_err(Into::into)
    }
}
