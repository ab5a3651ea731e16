//! REST DTOs for the tenant router.
//!
//! These DTOs have serde and utoipa derives for REST serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenant_router_sdk::{RoutedResponse, TenantRecord};
use utoipa::ToSchema;

/// Tenant record as exchanged over REST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantDto {
    pub tenant_id: String,
    pub resource_endpoint: String,
}

impl From<TenantRecord> for TenantDto {
    fn from(record: TenantRecord) -> Self {
        Self {
            tenant_id: record.tenant_id,
            resource_endpoint: record.resource_endpoint,
        }
    }
}

impl From<TenantDto> for TenantRecord {
    fn from(dto: TenantDto) -> Self {
        Self {
            tenant_id: dto.tenant_id,
            resource_endpoint: dto.resource_endpoint,
        }
    }
}

/// Upstream body wrapped in a uniform envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutedResponseDto {
    pub data: String,
}

impl From<RoutedResponse> for RoutedResponseDto {
    fn from(response: RoutedResponse) -> Self {
        Self {
            data: response.data,
        }
    }
}

/// Error envelope returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description.
    pub message: String,
    /// When the error was produced.
    pub date: DateTime<Utc>,
    /// Symbolic error kind, e.g. `TenantNotFoundException`.
    pub cause: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}
