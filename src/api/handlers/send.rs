//! Handler for the contact form relay.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::contact::{SendRequest, SendResponse};
use crate::state::ContactState;

/// Relays a contact form submission by email.
///
/// # Endpoint
///
/// `POST /send`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "email": "ada@example.org", "message": "Hello" }
/// ```
///
/// # Response
///
/// - **200 OK**: `{"success": true, "message": "Email sent!"}`
/// - **500**: `{"success": false, "message": "Failed to send email."}` on
///   an unreadable body or any composition or relay failure; the cause is
///   logged.
pub async fn send_handler(
    State(state): State<ContactState>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> (StatusCode, Json<SendResponse>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Unreadable contact form body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendResponse::failed()),
            );
        }
    };

    match state.contact_service.send(req.into()).await {
        Ok(()) => {
            tracing::info!("Contact message relayed");
            (StatusCode::OK, Json(SendResponse::sent()))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to relay contact message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendResponse::failed()),
            )
        }
    }
}
