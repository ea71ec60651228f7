//! HTTP-facing error type.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::bakery::BakeryApiError;
use crate::store::StoreError;

/// Application error, mapped onto HTTP responses.
///
/// Backend failures are surfaced with their message rather than swallowed,
/// so the dashboard can show staff what went wrong.
#[derive(Debug, Error)]
pub enum AppError {
    /// A store action failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request itself is malformed.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::Api(BakeryApiError::NotFound(_))) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Store(StoreError::Api(_)) => StatusCode::BAD_GATEWAY,
            Self::Store(StoreError::Validation(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::Store(StoreError::Validation("select at least one order".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn backend_not_found_propagates_as_404() {
        let err = AppError::Store(StoreError::Api(BakeryApiError::NotFound("order x".into())));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn backend_failures_map_to_bad_gateway() {
        let err = AppError::Store(StoreError::Api(BakeryApiError::Server("boom".into())));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
