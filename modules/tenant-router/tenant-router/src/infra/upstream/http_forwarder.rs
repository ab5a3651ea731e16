use async_trait::async_trait;
use std::time::Duration;

use anyhow::Context;
use tracing::instrument;

use crate::config::TenantRouterConfig;
use crate::domain::ports::UpstreamForwarder;

/// Forwards routed requests with a shared pooled `reqwest` client.
///
/// Exactly one GET per call, without extra headers, body or query. Redirects
/// follow the client's default policy.
pub struct HttpForwarder {
    client: reqwest::Client,
}

impl HttpForwarder {
    /// Build a forwarder from module configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &TenantRouterConfig) -> anyhow::Result<Self> {
        Self::with_timeouts(
            config.forward_timeout,
            config.connect_timeout,
            config.pool_max_idle_per_host,
        )
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeouts(
        timeout: Duration,
        connect_timeout: Duration,
        pool_max_idle_per_host: usize,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(pool_max_idle_per_host)
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamForwarder for HttpForwarder {
    #[instrument(skip(self), fields(endpoint = %endpoint))]
    async fn forward(&self, endpoint: &str) -> anyhow::Result<String> {
        let response = self.client.get(endpoint).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Upstream returned non-success status");
        }
        String::from_utf8(bytes.to_vec()).context("upstream body is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn forwarder() -> HttpForwarder {
        HttpForwarder::with_timeouts(Duration::from_secs(5), Duration::from_secs(1), 2).unwrap()
    }

    #[tokio::test]
    async fn test_returns_upstream_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/resource");
            then.status(200).body("Success Response");
        });

        let body = forwarder().forward(&server.url("/resource")).await.unwrap();

        assert_eq!(body, "Success Response");
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_error_status_body_is_passed_through() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/resource");
            then.status(503).body("upstream busy");
        });

        let body = forwarder().forward(&server.url("/resource")).await.unwrap();

        assert_eq!(body, "upstream busy");
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_non_utf8_body_is_an_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/binary");
            then.status(200).body(vec![0xFF, 0xFE, 0x41]);
        });

        let result = forwarder().forward(&server.url("/binary")).await;

        assert!(result.is_err());
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = forwarder().forward(&format!("http://{addr}/resource")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_timeout_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_millis(500)).body("late");
        });
        let forwarder =
            HttpForwarder::with_timeouts(Duration::from_millis(50), Duration::from_millis(50), 1)
                .unwrap();

        let result = forwarder.forward(&server.url("/slow")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_url_is_an_error() {
        let result = forwarder().forward("not a url").await;

        assert!(result.is_err());
    }
}
