//! Handler for visit logging.

use axum::extract::State;

use crate::api::dto::visit::LogVisitRequest;
use crate::api::middleware::client_info::ClientInfo;
use crate::api::middleware::lenient_json::LenientJson;
use crate::domain::entities::NewVisit;
use crate::error::AppError;
use crate::state::AnalyticsState;

/// Records one visit.
///
/// # Endpoint
///
/// `POST /log`
///
/// # Request Body
///
/// ```json
/// { "page": "/about" }
/// ```
///
/// A missing, non-JSON or malformed body records a visit with no page.
/// IP and user agent come from the request itself, see [`ClientInfo`].
///
/// # Response
///
/// `200 OK` with body `OK`.
///
/// # Errors
///
/// Returns `500` with a plain-text body if the insert fails; the cause is
/// logged.
pub async fn log_visit_handler(
    State(state): State<AnalyticsState>,
    client: ClientInfo,
    LenientJson(req): LenientJson<LogVisitRequest>,
) -> Result<&'static str, AppError> {
    let visit = state
        .visit_service
        .log_visit(NewVisit::new(req.page, client.ip, client.user_agent))
        .await?;

    tracing::debug!(page = ?visit.page, ip = ?visit.ip, "Visit recorded");

    Ok("OK")
}
