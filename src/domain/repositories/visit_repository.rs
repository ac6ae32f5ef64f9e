//! Repository trait for visit logging and analytics.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Visit count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DailyVisits {
    pub date: NaiveDate,
    pub count: i64,
}

/// Visit count for one hour of the day (0-23), summed across days.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct HourlyVisits {
    pub hour: i32,
    pub count: i64,
}

/// Visit count for one page.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PageVisits {
    pub page: Option<String>,
    pub count: i64,
}

/// Repository interface for the append-only `visits` table.
///
/// Every aggregate takes an optional exclusive lower bound on `timestamp`;
/// `None` means the whole table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Inserts one visit stamped with the database's current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the insert fails.
    async fn record_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Returns up to `limit` visits, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn recent_visits(&self, limit: i64) -> Result<Vec<Visit>, AppError>;

    /// Counts visits newer than `since`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn count_visits(&self, since: Option<DateTime<Utc>>) -> Result<i64, AppError>;

    /// Visit counts grouped by calendar day, oldest day first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn visits_per_day(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DailyVisits>, AppError>;

    /// Visit counts grouped by hour of day, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn visits_per_hour(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<HourlyVisits>, AppError>;

    /// The `limit` most visited pages, highest count first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn top_pages(
        &self,
        since: Option<DateTime<Utc>>,
        limit: i64,
    ) -> Result<Vec<PageVisits>, AppError>;

    /// Round-trips a trivial query to check connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
