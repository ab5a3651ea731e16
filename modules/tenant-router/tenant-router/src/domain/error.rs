//! Domain errors for the tenant router.

use tenant_router_sdk::TenantRouterError;
use thiserror::Error;

/// Domain-level errors for tenant router operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// No record exists for the tenant.
    #[error("tenant not found: {tenant_id}")]
    TenantNotFound { tenant_id: String },

    /// Rejected input.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// The upstream call did not complete.
    #[error("forwarding failed for tenant {tenant_id}: {cause}")]
    ForwardingFailed { tenant_id: String, cause: String },

    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn not_found(tenant_id: impl Into<String>) -> Self {
        Self::TenantNotFound {
            tenant_id: tenant_id.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<DomainError> for TenantRouterError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::TenantNotFound { tenant_id } => Self::tenant_not_found(tenant_id),
            DomainError::Validation { message } => Self::validation(message),
            DomainError::ForwardingFailed { tenant_id, cause } => {
                Self::forwarding_failed(tenant_id, cause)
            }
            DomainError::Storage(err) => Self::unexpected(format!("{err:#}")),
        }
    }
}
