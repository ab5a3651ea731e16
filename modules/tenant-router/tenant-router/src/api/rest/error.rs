//! REST error mapping for the tenant router.
//!
//! The only place where a [`TenantRouterError`] becomes a status code and body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use tenant_router_sdk::{ErrorKind, TenantRouterError};

use super::dto::ErrorResponse;
use crate::domain::error::DomainError;

const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

pub type ApiResult<T> = Result<T, ApiError>;

/// Error rendered as `{message, date, cause}`.
#[derive(Debug)]
pub struct ApiError(TenantRouterError);

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::TenantNotFound => StatusCode::NOT_FOUND,
            ErrorKind::MissingHeader | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::ForwardingFailed | ErrorKind::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<TenantRouterError> for ApiError {
    fn from(e: TenantRouterError) -> Self {
        Self(e)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.0.kind();

        let message = if kind == ErrorKind::Unexpected {
            tracing::error!(error = %self.0, "Unexpected error");
            UNEXPECTED_MESSAGE.to_owned()
        } else {
            self.0.to_string()
        };

        envelope(status, message, kind.as_str())
    }
}

/// Render the `{message, date, cause}` body with an explicit status.
///
/// Used directly for requests that never reach a handler.
pub fn envelope(status: StatusCode, message: String, cause: &str) -> Response {
    let body = ErrorResponse {
        message,
        date: Utc::now(),
        cause: cause.to_owned(),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (TenantRouterError::tenant_not_found("t"), StatusCode::NOT_FOUND),
            (TenantRouterError::missing_tenant_header(), StatusCode::BAD_REQUEST),
            (TenantRouterError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                TenantRouterError::forwarding_failed("t", "refused"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (TenantRouterError::unexpected("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[tokio::test]
    async fn test_unexpected_errors_hide_details() {
        let response =
            ApiError::from(TenantRouterError::unexpected("db password wrong")).into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "An unexpected error occurred");
        assert_eq!(json["cause"], "UnexpectedException");
    }
}
