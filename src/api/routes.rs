//! API route configuration.

use crate::api::handlers::{
    analytics_health_handler, contact_health_handler, log_visit_handler, send_handler,
    stats_handler,
};
use crate::state::{AnalyticsState, ContactState};
use axum::{
    Router,
    routing::{get, post},
};

/// Analytics API routes.
///
/// # Endpoints
///
/// - `POST /log`        - Record a visit
/// - `GET  /api/stats`  - Period-filtered aggregates
/// - `GET  /health`     - Database health check
pub fn analytics_routes() -> Router<AnalyticsState> {
    Router::new()
        .route("/log", post(log_visit_handler))
        .route("/api/stats", get(stats_handler))
        .route("/health", get(analytics_health_handler))
}

/// Contact relay API routes.
///
/// # Endpoints
///
/// - `POST /send`   - Relay a contact form submission
/// - `GET  /health` - Service health
pub fn contact_routes() -> Router<ContactState> {
    Router::new()
        .route("/send", post(send_handler))
        .route("/health", get(contact_health_handler))
}
