//! Web page route configuration.

use crate::state::AnalyticsState;
use crate::web::handlers::admin_handler;
use axum::{Router, routing::get};

/// Server-rendered analytics pages.
///
/// # Endpoints
///
/// - `GET /admin` - Table of the most recent visits
pub fn admin_routes() -> Router<AnalyticsState> {
    Router::new().route("/admin", get(admin_handler))
}
