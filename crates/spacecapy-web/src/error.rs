//! HTTP mapping for errors escaping a handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use spacecapy_core::error::SpaceCapyError;

/// Handler error. Always a 500; the cause is logged, not returned.
#[derive(Debug)]
pub struct HttpError(pub SpaceCapyError);

impl From<SpaceCapyError> for HttpError {
    fn from(e: SpaceCapyError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.0.code(), error = %self.0, "request failed");
        let body = Json(json!({
            "error": self.0.code(),
            "message": "internal server error",
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
