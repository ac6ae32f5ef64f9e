//! Visit statistics service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::period::Period;
use crate::domain::repositories::{DailyVisits, HourlyVisits, PageVisits, VisitRepository};
use crate::error::AppError;

/// Maximum number of entries in the most-visited pages ranking.
pub const TOP_PAGES_LIMIT: i64 = 10;

/// The three aggregates computed over one filtered row set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitStats {
    pub visits_over_time: Vec<DailyVisits>,
    pub visits_by_hour: Vec<HourlyVisits>,
    pub most_visited_pages: Vec<PageVisits>,
}

/// Service for period-filtered visit aggregates.
pub struct StatsService<R: VisitRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VisitRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Computes daily, hourly and top-page counts for `period`, relative to
    /// the current time.
    ///
    /// # Errors
    ///
    /// Returns the first [`AppError`] raised by any of the three queries.
    pub async fn get_stats(&self, period: Period) -> Result<VisitStats, AppError> {
        self.get_stats_at(period, Utc::now()).await
    }

    /// Same as [`Self::get_stats`] with an explicit reference time.
    ///
    /// # Errors
    ///
    /// Returns the first [`AppError`] raised by any of the three queries.
    pub async fn get_stats_at(
        &self,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<VisitStats, AppError> {
        let since = period.since(now);

        let (visits_over_time, visits_by_hour, most_visited_pages) = tokio::try_join!(
            self.repository.visits_per_day(since),
            self.repository.visits_per_hour(since),
            self.repository.top_pages(since, TOP_PAGES_LIMIT),
        )?;

        Ok(VisitStats {
            visits_over_time,
            visits_by_hour,
            most_visited_pages,
        })
    }

    /// Counts visits in `period`. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn count_visits(&self, period: Period) -> Result<i64, AppError> {
        self.repository
            .count_visits(period.since(Utc::now()))
            .await
    }
}
