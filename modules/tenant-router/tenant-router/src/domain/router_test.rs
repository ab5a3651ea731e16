#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::infra::storage::memory_repo::InMemoryTenantRepository;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tenant_router_sdk::TenantRecord;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Recorded {
        Request(String),
        Latency(String),
    }

    #[derive(Default)]
    struct RecordingMetrics {
        events: Mutex<Vec<Recorded>>,
    }

    impl RecordingMetrics {
        fn events(&self) -> Vec<Recorded> {
            self.events.lock().clone()
        }
    }

    impl ports::MetricsRecorder for RecordingMetrics {
        fn record_request(&self, tenant_id: &str) {
            self.events
                .lock()
                .push(Recorded::Request(tenant_id.to_owned()));
        }

        fn record_latency(&self, tenant_id: &str, _elapsed: Duration) {
            self.events
                .lock()
                .push(Recorded::Latency(tenant_id.to_owned()));
        }
    }

    struct StubForwarder {
        result: Result<String, String>,
        calls: AtomicUsize,
        endpoints: Mutex<Vec<String>>,
    }

    impl StubForwarder {
        fn ok(body: &str) -> Self {
            Self::with(Ok(body.to_owned()))
        }

        fn failing(cause: &str) -> Self {
            Self::with(Err(cause.to_owned()))
        }

        fn with(result: Result<String, String>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
                endpoints: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ports::UpstreamForwarder for StubForwarder {
        async fn forward(&self, endpoint: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.endpoints.lock().push(endpoint.to_owned());
            self.result.clone().map_err(|cause| anyhow::anyhow!(cause))
        }
    }

    async fn setup(
        forwarder: StubForwarder,
    ) -> (
        router::RequestRouter,
        Arc<RecordingMetrics>,
        Arc<StubForwarder>,
    ) {
        let directory =
            directory::TenantDirectory::new(Arc::new(InMemoryTenantRepository::new()));
        directory
            .create(TenantRecord::new(
                "tenant1",
                "https://tenant1-service.com/resource",
            ))
            .await
            .unwrap();

        let metrics = Arc::new(RecordingMetrics::default());
        let forwarder = Arc::new(forwarder);
        let router =
            router::RequestRouter::new(Arc::new(directory), forwarder.clone(), metrics.clone());
        (router, metrics, forwarder)
    }

    #[tokio::test]
    async fn test_successful_route_wraps_body_and_records_count_then_latency() {
        let (router, metrics, forwarder) = setup(StubForwarder::ok("Success Response")).await;

        let response = router.route("tenant1").await.unwrap();

        assert_eq!(response.data, "Success Response");
        assert_eq!(
            metrics.events(),
            vec![
                Recorded::Request("tenant1".to_owned()),
                Recorded::Latency("tenant1".to_owned()),
            ]
        );
        assert_eq!(forwarder.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *forwarder.endpoints.lock(),
            vec!["https://tenant1-service.com/resource".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_unknown_tenant_records_nothing_and_forwards_nothing() {
        let (router, metrics, forwarder) = setup(StubForwarder::ok("unused")).await;

        let err = router.route("nonexistent").await.unwrap_err();

        let sdk_err: tenant_router_sdk::TenantRouterError = err.into();
        assert_eq!(sdk_err.to_string(), "Tenant with ID nonexistent not found");
        assert!(metrics.events().is_empty());
        assert_eq!(forwarder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_failed_forward_counts_request_but_records_no_latency() {
        let (router, metrics, forwarder) =
            setup(StubForwarder::failing("Connection error")).await;

        let err = router.route("tenant1").await.unwrap_err();

        match &err {
            error::DomainError::ForwardingFailed { tenant_id, cause } => {
                assert_eq!(tenant_id, "tenant1");
                assert_eq!(cause, "Connection error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let sdk_err: tenant_router_sdk::TenantRouterError = err.into();
        assert!(
            sdk_err
                .to_string()
                .contains("Routing failed for tenant ID tenant1")
        );
        assert_eq!(
            metrics.events(),
            vec![Recorded::Request("tenant1".to_owned())]
        );
        assert_eq!(forwarder.calls.load(Ordering::SeqCst), 1);
        assert!(logs_contain("Forwarding failed"));
    }

    #[tokio::test]
    async fn test_concurrent_routes_are_counted_independently() {
        let (router, metrics, forwarder) = setup(StubForwarder::ok("ok")).await;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let router = router.clone();
                tokio::spawn(async move { router.route("tenant1").await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let events = metrics.events();
        let requests = events
            .iter()
            .filter(|e| matches!(e, Recorded::Request(_)))
            .count();
        let latencies = events
            .iter()
            .filter(|e| matches!(e, Recorded::Latency(_)))
            .count();
        assert_eq!(requests, 8);
        assert_eq!(latencies, 8);
        assert_eq!(forwarder.calls.load(Ordering::SeqCst), 8);
    }
}
