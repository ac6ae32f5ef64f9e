//! Business logic services for the application layer.

pub mod contact_service;
pub mod stats_service;
pub mod visit_service;

pub use contact_service::ContactService;
pub use stats_service::{StatsService, VisitStats};
pub use visit_service::VisitService;
