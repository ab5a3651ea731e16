//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tenant_router_sdk::{TENANT_ID_HEADER, TenantRouterError};

use super::error::ApiError;

/// Value of the required `X-Tenant-ID` header.
///
/// A missing, empty or non-ASCII header is rejected with `MissingHeader`.
#[derive(Debug, Clone)]
pub struct TenantIdHeader(pub String);

impl<S> FromRequestParts<S> for TenantIdHeader
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(TENANT_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_owned()))
            .ok_or_else(|| TenantRouterError::missing_tenant_header().into())
    }
}
