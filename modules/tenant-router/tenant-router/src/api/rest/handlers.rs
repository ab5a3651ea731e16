//! REST handlers for the tenant router.
//!
//! Handlers are thin: extract input, call the domain service, map errors to the envelope.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tenant_router_sdk::TenantRouterError;

use super::dto::{ErrorResponse, HealthResponse, RoutedResponseDto, TenantDto};
use super::error::{ApiResult, envelope};
use super::extract::TenantIdHeader;
use crate::domain::service::Service;
use crate::infra::metrics::prometheus_recorder::PrometheusMetrics;

/// GET /api/route - Forward the request to the tenant's endpoint.
#[utoipa::path(
    get,
    path = "/api/route",
    tag = "routing",
    params(("X-Tenant-ID" = String, Header, description = "Tenant to route the request for")),
    responses(
        (status = 200, description = "Upstream response body", body = RoutedResponseDto),
        (status = 400, description = "Missing X-Tenant-ID header", body = ErrorResponse),
        (status = 404, description = "Unknown tenant", body = ErrorResponse),
        (status = 500, description = "Forwarding failed", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc), fields(tenant_id = %tenant_id))]
pub async fn route_request(
    Extension(svc): Extension<Arc<Service>>,
    TenantIdHeader(tenant_id): TenantIdHeader,
) -> ApiResult<Json<RoutedResponseDto>> {
    let response = svc.route_request(&tenant_id).await?;
    Ok(Json(response.into()))
}

/// GET /api/tenants/{tenantId} - Get a tenant record.
#[utoipa::path(
    get,
    path = "/api/tenants/{tenantId}",
    tag = "tenants",
    params(("tenantId" = String, Path, description = "Tenant identifier")),
    responses(
        (status = 200, description = "Tenant record", body = TenantDto),
        (status = 404, description = "Unknown tenant", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc), fields(tenant_id = %tenant_id))]
pub async fn get_tenant(
    Extension(svc): Extension<Arc<Service>>,
    Path(tenant_id): Path<String>,
) -> ApiResult<Json<TenantDto>> {
    let record = svc.get_tenant(&tenant_id).await?;
    Ok(Json(record.into()))
}

/// POST /api/tenants - Register or replace a tenant.
#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = "tenants",
    request_body = TenantDto,
    responses(
        (status = 200, description = "Persisted tenant record", body = TenantDto),
        (status = 400, description = "Invalid tenant record", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc, payload))]
pub async fn create_tenant(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<TenantDto>, JsonRejection>,
) -> ApiResult<Json<TenantDto>> {
    let Json(dto) = payload.map_err(|e| TenantRouterError::validation(e.body_text()))?;
    let record = svc.create_tenant(dto.into()).await?;
    Ok(Json(record.into()))
}

/// DELETE /api/tenants/{tenantId} - Remove a tenant.
#[utoipa::path(
    delete,
    path = "/api/tenants/{tenantId}",
    tag = "tenants",
    params(("tenantId" = String, Path, description = "Tenant identifier")),
    responses(
        (status = 204, description = "Tenant removed"),
        (status = 404, description = "Unknown tenant", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc), fields(tenant_id = %tenant_id))]
pub async fn delete_tenant(
    Extension(svc): Extension<Arc<Service>>,
    Path(tenant_id): Path<String>,
) -> ApiResult<StatusCode> {
    svc.remove_tenant(&tenant_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health - Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// GET /metrics - Prometheus text exposition.
pub async fn metrics(
    Extension(metrics): Extension<Arc<PrometheusMetrics>>,
) -> ApiResult<impl IntoResponse> {
    let text = metrics
        .render()
        .map_err(|e| TenantRouterError::unexpected(format!("metrics encoding failed: {e}")))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        text,
    ))
}

/// Fallback for paths no route matches.
#[allow(clippy::needless_pass_by_value)]
pub async fn not_found(method: Method, uri: Uri) -> Response {
    envelope(
        StatusCode::NOT_FOUND,
        format!("No handler found for {method} {}", uri.path()),
        "NoHandlerFoundException",
    )
}

/// Fallback for known paths requested with an unsupported method.
#[allow(clippy::needless_pass_by_value)]
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    envelope(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Request method {method} is not supported for {}", uri.path()),
        "MethodNotAllowedException",
    )
}
