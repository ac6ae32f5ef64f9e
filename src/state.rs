//! Shared handler state for both services.
//!
//! Each state is cheap to clone: services sit behind `Arc`, and the
//! connection pool / SMTP transport they wrap are created once at startup.

use std::sync::Arc;

use crate::application::services::{ContactService, StatsService, VisitService};
use crate::domain::mailer::Mailer;
use crate::domain::repositories::VisitRepository;

/// State of the visit analytics service.
#[derive(Clone)]
pub struct AnalyticsState {
    pub visit_service: Arc<VisitService<dyn VisitRepository>>,
    pub stats_service: Arc<StatsService<dyn VisitRepository>>,
}

impl AnalyticsState {
    /// Builds both services over the same repository.
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self {
            visit_service: Arc::new(VisitService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository)),
        }
    }
}

/// State of the contact relay service.
#[derive(Clone)]
pub struct ContactState {
    pub contact_service: Arc<ContactService<dyn Mailer>>,
}

impl ContactState {
    pub fn new(mailer: Arc<dyn Mailer>, recipient: impl Into<String>) -> Self {
        Self {
            contact_service: Arc::new(ContactService::new(mailer, recipient)),
        }
    }
}
