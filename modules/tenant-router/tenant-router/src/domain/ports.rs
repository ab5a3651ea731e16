//! Outbound ports used by the router.

use std::time::Duration;

use async_trait::async_trait;
use tenant_router_sdk::TenantRecord;

use super::error::DomainError;

/// Resolves a tenant id to its record.
#[async_trait]
pub trait TenantLookup: Send + Sync {
    /// # Errors
    /// `TenantNotFound` when no record exists.
    async fn lookup(&self, tenant_id: &str) -> Result<TenantRecord, DomainError>;
}

/// Sink for per-tenant request metrics.
///
/// Implementations must not block and must not fail the caller; backend
/// errors are logged and dropped.
pub trait MetricsRecorder: Send + Sync {
    /// Count one resolved request for the tenant.
    fn record_request(&self, tenant_id: &str);

    /// Record the duration of one successful forward for the tenant.
    fn record_latency(&self, tenant_id: &str, elapsed: Duration);
}

/// Issues the single outbound call for a routed request.
#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Perform a GET against `endpoint` and return the response body.
    ///
    /// Any response that arrives is a success regardless of its status;
    /// only transport-level failures are errors.
    ///
    /// # Errors
    /// Connect, timeout, DNS, redirect or body decoding failures.
    async fn forward(&self, endpoint: &str) -> anyhow::Result<String>;
}

/// Recorder used when metrics are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsRecorder for NoopMetrics {
    fn record_request(&self, _tenant_id: &str) {}

    fn record_latency(&self, _tenant_id: &str, _elapsed: Duration) {}
}
