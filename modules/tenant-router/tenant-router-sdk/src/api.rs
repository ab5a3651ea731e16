//! Public API trait for the tenant router.

use async_trait::async_trait;

use crate::error::TenantRouterError;
use crate::models::{RoutedResponse, TenantRecord};

/// In-process API of the tenant router.
///
/// Every call is attempted exactly once; failures are surfaced through
/// [`TenantRouterError`] and never retried.
#[async_trait]
pub trait TenantRouterClient: Send + Sync {
    /// Look up the record registered for `tenant_id`.
    ///
    /// # Errors
    ///
    /// - `TenantNotFound` if no record exists
    async fn get_tenant(&self, tenant_id: &str) -> Result<TenantRecord, TenantRouterError>;

    /// Register a tenant, replacing any record with the same id.
    ///
    /// # Errors
    ///
    /// - `Validation` if `tenant_id` is empty
    async fn create_tenant(&self, record: TenantRecord)
    -> Result<TenantRecord, TenantRouterError>;

    /// Permanently delete a tenant.
    ///
    /// # Errors
    ///
    /// - `TenantNotFound` if no record exists
    async fn remove_tenant(&self, tenant_id: &str) -> Result<(), TenantRouterError>;

    /// Forward one GET request to the tenant's endpoint and return its body.
    ///
    /// # Errors
    ///
    /// - `TenantNotFound` if the tenant is unknown (nothing is forwarded)
    /// - `ForwardingFailed` if the upstream call did not complete
    async fn route_request(&self, tenant_id: &str) -> Result<RoutedResponse, TenantRouterError>;
}
