//! Tenant router module configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tenant router module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantRouterConfig {
    /// Upper bound for a single forwarded call, connect included.
    #[serde(with = "humantime_serde")]
    pub forward_timeout: Duration,

    /// Upper bound for establishing the upstream connection.
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Maximum idle connections kept per upstream host.
    pub pool_max_idle_per_host: usize,

    /// Where tenant records live.
    pub storage: StorageConfig,

    /// Per-tenant request metrics.
    pub metrics: MetricsConfig,
}

impl Default for TenantRouterConfig {
    fn default() -> Self {
        Self {
            forward_timeout: default_forward_timeout(),
            connect_timeout: default_connect_timeout(),
            pool_max_idle_per_host: 10,
            storage: StorageConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

fn default_forward_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(3)
}

/// Tenant record storage backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Process-local map; records are lost on restart.
    #[default]
    Memory,
    /// SQL table `tenant_data`, migrated on startup.
    Database {
        /// Connection string, e.g. `sqlite://tenants.db?mode=rwc`.
        dsn: String,
    },
}

/// Metrics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsConfig {
    /// When disabled, recording is a no-op and `/metrics` is not mounted.
    pub enabled: bool,
    /// Prefix prepended to every metric name.
    pub prefix: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix: "tenant_router".to_owned(),
        }
    }
}
