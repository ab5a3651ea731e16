//! Error types for the tenant router.

use thiserror::Error;

/// Header carrying the tenant identifier on routed requests.
pub const TENANT_ID_HEADER: &str = "X-Tenant-ID";

/// Errors surfaced by the tenant router API.
#[derive(Debug, Error)]
pub enum TenantRouterError {
    /// No record exists for the tenant.
    #[error("Tenant with ID {tenant_id} not found")]
    TenantNotFound { tenant_id: String },

    /// A required routing input was absent.
    #[error("Missing required header: {header}")]
    MissingHeader { header: String },

    /// The outbound call did not complete.
    #[error("Routing failed for tenant ID {tenant_id}: {cause}")]
    ForwardingFailed { tenant_id: String, cause: String },

    /// Input was rejected before reaching storage.
    #[error("{message}")]
    Validation { message: String },

    /// Anything else.
    #[error("internal error: {message}")]
    Unexpected { message: String },
}

impl TenantRouterError {
    #[must_use]
    pub fn tenant_not_found(tenant_id: impl Into<String>) -> Self {
        Self::TenantNotFound {
            tenant_id: tenant_id.into(),
        }
    }

    #[must_use]
    pub fn missing_tenant_header() -> Self {
        Self::MissingHeader {
            header: TENANT_ID_HEADER.to_owned(),
        }
    }

    #[must_use]
    pub fn forwarding_failed(tenant_id: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::ForwardingFailed {
            tenant_id: tenant_id.into(),
            cause: cause.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Symbolic kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TenantNotFound { .. } => ErrorKind::TenantNotFound,
            Self::MissingHeader { .. } => ErrorKind::MissingHeader,
            Self::ForwardingFailed { .. } => ErrorKind::ForwardingFailed,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }
}

/// Symbolic error kinds, stable across transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TenantNotFound,
    MissingHeader,
    ForwardingFailed,
    Validation,
    Unexpected,
}

impl ErrorKind {
    /// Name reported in the `cause` field of error envelopes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TenantNotFound => "TenantNotFoundException",
            Self::MissingHeader => "MissingHeaderException",
            Self::ForwardingFailed => "RequestProcessingException",
            Self::Validation => "ValidationException",
            Self::Unexpected => "UnexpectedException",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(
            TenantRouterError::tenant_not_found("nonexistent").to_string(),
            "Tenant with ID nonexistent not found"
        );
        assert_eq!(
            TenantRouterError::missing_tenant_header().to_string(),
            "Missing required header: X-Tenant-ID"
        );
        assert_eq!(
            TenantRouterError::forwarding_failed("tenant1", "connection refused").to_string(),
            "Routing failed for tenant ID tenant1: connection refused"
        );
    }

    #[test]
    fn kinds_map_to_cause_names() {
        assert_eq!(
            TenantRouterError::tenant_not_found("t").kind().as_str(),
            "TenantNotFoundException"
        );
        assert_eq!(
            TenantRouterError::missing_tenant_header().kind().as_str(),
            "MissingHeaderException"
        );
        assert_eq!(
            TenantRouterError::forwarding_failed("t", "x").kind().as_str(),
            "RequestProcessingException"
        );
        assert_eq!(
            TenantRouterError::unexpected("boom").kind(),
            ErrorKind::Unexpected
        );
    }
}
