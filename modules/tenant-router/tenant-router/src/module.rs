//! Tenant router module definition.

use std::sync::Arc;

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tenant_router_sdk::TenantRouterClient;
use tracing::info;

use crate::api::rest::routes;
use crate::config::{StorageConfig, TenantRouterConfig};
use crate::domain::ports::{MetricsRecorder, NoopMetrics, UpstreamForwarder};
use crate::domain::repo::TenantRepository;
use crate::domain::service::Service;
use crate::infra::metrics::prometheus_recorder::PrometheusMetrics;
use crate::infra::storage::memory_repo::InMemoryTenantRepository;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmTenantRepository;
use crate::infra::upstream::http_forwarder::HttpForwarder;
use crate::local_client::TenantRouterLocalClient;

/// Wired tenant router: storage, forwarder and metrics behind one service.
pub struct TenantRouterModule {
    service: Arc<Service>,
    metrics: Option<Arc<PrometheusMetrics>>,
}

impl TenantRouterModule {
    /// Build the module from configuration.
    ///
    /// Connects to and migrates the database when `storage.kind` is `database`.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable, migrations fail, the
    /// HTTP client cannot be built or the metric prefix is invalid.
    pub async fn init(cfg: &TenantRouterConfig) -> anyhow::Result<Self> {
        info!("Initializing tenant router module");

        let repo = build_repository(&cfg.storage).await?;
        let forwarder: Arc<dyn UpstreamForwarder> = Arc::new(HttpForwarder::new(cfg)?);

        let prometheus = if cfg.metrics.enabled {
            let metrics = Arc::new(PrometheusMetrics::new(&cfg.metrics.prefix)?);
            info!(prefix = %cfg.metrics.prefix, "Prometheus tenant metrics enabled");
            Some(metrics)
        } else {
            info!("Tenant metrics disabled");
            None
        };
        let recorder: Arc<dyn MetricsRecorder> = match &prometheus {
            Some(metrics) => metrics.clone(),
            None => Arc::new(NoopMetrics),
        };

        Ok(Self::from_parts(repo, forwarder, recorder, prometheus))
    }

    /// Assemble the module from explicit collaborators.
    #[must_use]
    pub fn from_parts(
        repo: Arc<dyn TenantRepository>,
        forwarder: Arc<dyn UpstreamForwarder>,
        recorder: Arc<dyn MetricsRecorder>,
        prometheus: Option<Arc<PrometheusMetrics>>,
    ) -> Self {
        Self {
            service: Arc::new(Service::new(repo, forwarder, recorder)),
            metrics: prometheus,
        }
    }

    /// REST routes with their middleware stack.
    #[must_use]
    pub fn rest_router(&self) -> axum::Router {
        info!("Registering tenant router REST routes");
        routes::router(self.service.clone(), self.metrics.clone())
    }

    /// In-process client over the same service the REST routes use.
    #[must_use]
    pub fn client(&self) -> Arc<dyn TenantRouterClient> {
        Arc::new(TenantRouterLocalClient::new(self.service.clone()))
    }
}

async fn build_repository(storage: &StorageConfig) -> anyhow::Result<Arc<dyn TenantRepository>> {
    match storage {
        StorageConfig::Memory => {
            info!("Using in-memory tenant storage");
            Ok(Arc::new(InMemoryTenantRepository::new()))
        }
        StorageConfig::Database { dsn } => {
            info!("Using database tenant storage");
            let conn = Database::connect(dsn.as_str()).await?;
            info!("Running tenant router database migrations");
            Migrator::up(&conn, None).await?;
            Ok(Arc::new(SeaOrmTenantRepository::new(conn)))
        }
    }
}
