//! Mapping from core errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use wm_core::WmError;

/// Response-side wrapper for [`WmError`]. Lookup misses become 404;
/// everything else is an internal error. Bodies carry only the generic
/// status message, details stay in the logs.
#[derive(Debug)]
pub struct ApiError(pub WmError);

impl From<WmError> for ApiError {
    fn from(err: WmError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            WmError::WorkspaceNotFound { .. } => StatusCode::NOT_FOUND,
            WmError::MissingIdentity
            | WmError::OracleUnavailable { .. }
            | WmError::DirectoryUnavailable { .. }
            | WmError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let message = status
            .canonical_reason()
            .unwrap_or("Internal Server Error");
        (status, Json(json!({ "message": message }))).into_response()
    }
}
