//! HTTP error mapping for the tracker API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::Error;

/// Wrapper converting crate errors into API error bodies.
///
/// The API reports every domain error as a JSON body of the shape
/// `{"error": <message>}` with the default success status; clients
/// distinguish failures by the presence of the `error` field, not by the
/// status code.
pub struct ApiError(pub Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::OK, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}
