use utoipa::OpenApi;

use super::dto::{ErrorResponse, HealthResponse, RoutedResponseDto, TenantDto};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Tenant Router", description = "Per-tenant request routing"),
    paths(
        handlers::route_request,
        handlers::get_tenant,
        handlers::create_tenant,
        handlers::delete_tenant,
        handlers::health,
    ),
    components(schemas(TenantDto, RoutedResponseDto, ErrorResponse, HealthResponse)),
    tags(
        (name = "routing", description = "Request forwarding"),
        (name = "tenants", description = "Tenant directory"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;
