//! Request router: resolve, count, forward, time.

use std::sync::Arc;
use std::time::Instant;

use tenant_router_sdk::RoutedResponse;
use tracing::instrument;

use super::error::DomainError;
use super::ports::{MetricsRecorder, TenantLookup, UpstreamForwarder};

/// Stateless orchestrator of a single routed request.
///
/// Per request the order is fixed: resolve the tenant, count the request,
/// forward once, and record latency only if the forward succeeded. An
/// unknown tenant records nothing and forwards nothing.
#[derive(Clone)]
pub struct RequestRouter {
    lookup: Arc<dyn TenantLookup>,
    forwarder: Arc<dyn UpstreamForwarder>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl RequestRouter {
    #[must_use]
    pub fn new(
        lookup: Arc<dyn TenantLookup>,
        forwarder: Arc<dyn UpstreamForwarder>,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Self {
        Self {
            lookup,
            forwarder,
            metrics,
        }
    }

    /// Route one request for `tenant_id`.
    ///
    /// # Errors
    /// `TenantNotFound` when the tenant is unknown, `ForwardingFailed` when
    /// the upstream call does not complete.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn route(&self, tenant_id: &str) -> Result<RoutedResponse, DomainError> {
        let record = self.lookup.lookup(tenant_id).await?;
        tracing::info!(endpoint = %record.resource_endpoint, "Routing request");

        self.metrics.record_request(tenant_id);
        let start = Instant::now();

        match self.forwarder.forward(&record.resource_endpoint).await {
            Ok(data) => {
                let elapsed = start.elapsed();
                self.metrics.record_latency(tenant_id, elapsed);
                tracing::info!(
                    elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                    "Request routed"
                );
                Ok(RoutedResponse { data })
            }
            Err(e) => {
                let cause = format!("{e:#}");
                tracing::error!(error = %cause, "Forwarding failed");
                Err(DomainError::ForwardingFailed {
                    tenant_id: tenant_id.to_owned(),
                    cause,
                })
            }
        }
    }
}
