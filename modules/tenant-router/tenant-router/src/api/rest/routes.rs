//! HTTP router assembly for the tenant router.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use tenant_router_sdk::TenantRouterError;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;
use utoipa::OpenApi;

use super::error::ApiError;
use super::handlers;
use super::openapi::ApiDoc;
use crate::domain::service::Service;
use crate::infra::metrics::prometheus_recorder::PrometheusMetrics;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the REST router with its middleware stack.
///
/// `metrics` mounts `/metrics` when present.
#[must_use]
pub fn router(service: Arc<Service>, metrics: Option<Arc<PrometheusMetrics>>) -> Router {
    let mut router = Router::new()
        .route("/api/route", get(handlers::route_request))
        .route("/api/tenants", post(handlers::create_tenant))
        .route(
            "/api/tenants/{tenant_id}",
            get(handlers::get_tenant).delete(handlers::delete_tenant),
        )
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(openapi_json));

    if let Some(metrics) = metrics {
        router = router.route(
            "/metrics",
            get(handlers::metrics).layer(Extension(metrics)),
        );
    }

    // Method fallback only covers routes registered before it.
    let router = router
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed);

    // Runtime order: SetRequestId -> PropagateRequestId -> Trace -> CatchPanic -> handlers
    router
        .layer(Extension(service))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    let rid = req
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("n/a");

                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        request_id = %rid,
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(|res: &Response, latency: Duration, span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[allow(clippy::needless_pass_by_value)]
fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::from(TenantRouterError::unexpected("request handler panicked")).into_response()
}
