//! Prometheus-backed [`MetricsRecorder`].
//!
//! Collected metrics (prefix from `metrics.prefix`, default `tenant_router`):
//! - `<prefix>_tenant_requests_count`: requests routed to a resolved tenant (counter)
//! - `<prefix>_tenant_requests_latency_seconds`: duration of successful forwards (histogram)
//!
//! Both carry a single `tenant_id` label.

use std::time::Duration;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use crate::domain::ports::MetricsRecorder;

const TENANT_LABEL: &str = "tenant_id";

/// Recorder owning its own registry, rendered on `/metrics`.
#[derive(Clone)]
pub struct PrometheusMetrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
}

impl PrometheusMetrics {
    /// Create and register the tenant metrics.
    ///
    /// # Errors
    /// Returns an error if the prefix produces an invalid metric name.
    pub fn new(prefix: &str) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new(
                format!("{prefix}_tenant_requests_count"),
                "Requests routed to a resolved tenant",
            ),
            &[TENANT_LABEL],
        )?;
        let latency = HistogramVec::new(
            HistogramOpts::new(
                format!("{prefix}_tenant_requests_latency_seconds"),
                "Latency of successful upstream forwards",
            ),
            &[TENANT_LABEL],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;

        Ok(Self {
            registry,
            requests,
            latency,
        })
    }

    /// Render all metrics in Prometheus text format.
    ///
    /// # Errors
    /// Returns an error if encoding fails.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl MetricsRecorder for PrometheusMetrics {
    fn record_request(&self, tenant_id: &str) {
        match self.requests.get_metric_with_label_values(&[tenant_id]) {
            Ok(counter) => counter.inc(),
            Err(e) => tracing::warn!(error = %e, tenant_id, "Failed to record request count"),
        }
    }

    fn record_latency(&self, tenant_id: &str, elapsed: Duration) {
        match self.latency.get_metric_with_label_values(&[tenant_id]) {
            Ok(histogram) => histogram.observe(elapsed.as_secs_f64()),
            Err(e) => tracing::warn!(error = %e, tenant_id, "Failed to record latency"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_count_and_latency_per_tenant() {
        let metrics = PrometheusMetrics::new("test").unwrap();

        metrics.record_request("tenant1");
        metrics.record_request("tenant1");
        metrics.record_latency("tenant1", Duration::from_millis(20));
        metrics.record_request("tenant2");

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"test_tenant_requests_count{tenant_id="tenant1"} 2"#));
        assert!(text.contains(r#"test_tenant_requests_count{tenant_id="tenant2"} 1"#));
        assert!(text.contains(r#"test_tenant_requests_latency_seconds_count{tenant_id="tenant1"} 1"#));
        assert!(!text.contains(r#"test_tenant_requests_latency_seconds_count{tenant_id="tenant2"}"#));
    }

    #[test]
    fn test_invalid_prefix_is_rejected() {
        assert!(PrometheusMetrics::new("bad prefix").is_err());
    }
}
