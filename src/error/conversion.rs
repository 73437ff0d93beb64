//! Conversion of `ApiError` into HTTP responses.
//!
//! Every error body has the shape `{"success": false, "error": ...}`.
//! Validation errors carry an array of `{field, message}` entries; all other
//! variants carry a fixed message string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = %status.as_u16(), "request rejected");
        }

        let error = match &self {
            ApiError::Validation(violations) => json!(violations),
            other => json!(other.public_message()),
        };

        let body = json!({
            "success": false,
            "error": error,
        });

        (status, Json(body)).into_response()
    }
}
