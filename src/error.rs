//! Application error type and its HTTP mapping.
//!
//! Every failure is opaque to the client: the cause is logged server-side
//! and the response carries a generic message. Handlers whose contract is a
//! JSON body (`/api/stats`, `/send`) build their own failure bodies; all
//! other routes fall back to [`AppError`]'s plain-text response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body of every plain-text 500 response.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
    }
}
