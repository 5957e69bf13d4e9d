//! HTTP error mapping.
//!
//! Every failure surfaced by validation, the handlers, or the store is
//! classified here and rendered as a uniform `{"error": ...}` JSON body.
//! Store errors are logged with their cause but never reach the client
//! verbatim.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

use crate::params::ValidationError;

#[derive(Debug)]
pub enum ApiError {
    /// Malformed or out-of-range input; always client-caused.
    Validation(ValidationError),
    /// Well-formed identity lookup with zero matching rows.
    NotFound(String),
    /// Data-store failure during a request.
    Database(wavetour_core::Error),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<wavetour_core::Error> for ApiError {
    // The store signals absence with `Ok(None)`, never an error, so any
    // error crossing this boundary is a data-store failure.
    fn from(err: wavetour_core::Error) -> Self {
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(err) => {
                let body = Json(serde_json::json!({
                    "error": err.message,
                    "field": err.field,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            ApiError::NotFound(msg) => {
                let body = Json(serde_json::json!({ "error": msg }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Database(err) => {
                // Log the cause; the client gets a generic body.
                error!(error = %err, "Request failed with data-store error");
                let body = Json(serde_json::json!({ "error": "Internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
