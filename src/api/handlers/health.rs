//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::{AnalyticsState, ContactState};

/// Returns analytics service health with a database check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database check failed
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "database": { "status": "ok", "message": "Connected" } }
/// }
/// ```
pub async fn analytics_health_handler(
    State(state): State<AnalyticsState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match state.visit_service.ping().await {
        Ok(()) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    };

    respond(HealthChecks {
        database: Some(database),
        ..Default::default()
    })
}

/// Returns contact service health.
///
/// The relay is not contacted; the check reports which relay is configured.
///
/// # Endpoint
///
/// `GET /health`
pub async fn contact_health_handler(
    State(state): State<ContactState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let smtp = CheckStatus::ok(format!(
        "Relay {} configured",
        state.contact_service.relay()
    ));

    respond(HealthChecks {
        smtp: Some(smtp),
        ..Default::default()
    })
}

fn respond(
    checks: HealthChecks,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let all_healthy = [&checks.database, &checks.smtp]
        .into_iter()
        .flatten()
        .all(CheckStatus::is_ok);

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
