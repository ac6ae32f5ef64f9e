//! Top-level routers of both services.
//!
//! # Analytics Service
//!
//! - `POST /log`        - Record a visit
//! - `GET  /admin`      - Recent visits table (HTML)
//! - `GET  /api/stats`  - Aggregated statistics (JSON)
//! - `GET  /health`     - Health check
//! - everything else    - Static files from the configured directory
//!
//! # Contact Service
//!
//! - `POST /send`       - Contact form relay
//! - `GET  /health`     - Health check
//!
//! # Middleware
//!
//! - **CORS** - Any origin, method and header
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::{AnalyticsState, ContactState};
use crate::web;
use axum::Router;
use tower_http::services::ServeDir;

/// Constructs the analytics service router.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served for paths no route matches
pub fn analytics_router(state: AnalyticsState, static_dir: &str) -> Router {
    Router::new()
        .merge(api::routes::analytics_routes())
        .merge(web::routes::admin_routes())
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the contact service router.
pub fn contact_router(state: ContactState) -> Router {
    Router::new()
        .merge(api::routes::contact_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
