//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one route.

pub mod health;
pub mod log_visit;
pub mod send;
pub mod stats;

pub use health::{analytics_health_handler, contact_health_handler};
pub use log_visit::log_visit_handler;
pub use send::send_handler;
pub use stats::stats_handler;
