//! Transport-agnostic models for the tenant router.

/// Mapping from a tenant identifier to the single upstream endpoint serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantRecord {
    /// Primary key. Must be non-empty.
    pub tenant_id: String,
    /// Absolute URL that routed requests are forwarded to.
    pub resource_endpoint: String,
}

impl TenantRecord {
    #[must_use]
    pub fn new(tenant_id: impl Into<String>, resource_endpoint: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            resource_endpoint: resource_endpoint.into(),
        }
    }
}

/// Upstream response body relayed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedResponse {
    pub data: String,
}
