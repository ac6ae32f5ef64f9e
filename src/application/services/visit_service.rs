//! Visit logging service.

use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// Number of rows shown on the admin page.
pub const RECENT_VISITS_LIMIT: i64 = 50;

/// Service for recording visits and listing the latest ones.
pub struct VisitService<R: VisitRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VisitRepository + ?Sized> VisitService<R> {
    /// Creates a new visit service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records a visit. The page is stored exactly as received.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the insert fails.
    pub async fn log_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        self.repository.record_visit(new_visit).await
    }

    /// Returns the [`RECENT_VISITS_LIMIT`] most recent visits, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn recent_visits(&self) -> Result<Vec<Visit>, AppError> {
        self.repository.recent_visits(RECENT_VISITS_LIMIT).await
    }

    /// Returns up to `limit` recent visits. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn recent_visits_limited(&self, limit: i64) -> Result<Vec<Visit>, AppError> {
        self.repository.recent_visits(limit).await
    }

    /// Checks that the database answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the database is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
