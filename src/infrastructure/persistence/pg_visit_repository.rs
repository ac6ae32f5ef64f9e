//! PostgreSQL implementation of the visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::{DailyVisits, HourlyVisits, PageVisits, VisitRepository};
use crate::error::AppError;

/// PostgreSQL repository over the `visits` table.
///
/// Aggregates share the filter `$1::timestamptz IS NULL OR "timestamp" > $1`
/// so that a `None` bound scans the whole table. Days and hours are
/// bucketed in UTC regardless of the session time zone.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn record_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let visit = sqlx::query_as::<_, Visit>(
            r#"
            INSERT INTO visits ("timestamp", page, ip, user_agent)
            VALUES (NOW(), $1, $2, $3)
            RETURNING "timestamp", page, ip, user_agent
            "#,
        )
        .bind(new_visit.page)
        .bind(new_visit.ip)
        .bind(new_visit.user_agent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(visit)
    }

    async fn recent_visits(&self, limit: i64) -> Result<Vec<Visit>, AppError> {
        let visits = sqlx::query_as::<_, Visit>(
            r#"
            SELECT "timestamp", page, ip, user_agent
            FROM visits
            ORDER BY "timestamp" DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(visits)
    }

    async fn count_visits(&self, since: Option<DateTime<Utc>>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM visits
            WHERE ($1::timestamptz IS NULL OR "timestamp" > $1)
            "#,
        )
        .bind(since)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn visits_per_day(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DailyVisits>, AppError> {
        let rows = sqlx::query_as::<_, DailyVisits>(
            r#"
            SELECT DATE("timestamp" AT TIME ZONE 'UTC') AS date, COUNT(*) AS count
            FROM visits
            WHERE ($1::timestamptz IS NULL OR "timestamp" > $1)
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(since)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn visits_per_hour(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<HourlyVisits>, AppError> {
        let rows = sqlx::query_as::<_, HourlyVisits>(
            r#"
            SELECT EXTRACT(HOUR FROM "timestamp" AT TIME ZONE 'UTC')::int4 AS hour, COUNT(*) AS count
            FROM visits
            WHERE ($1::timestamptz IS NULL OR "timestamp" > $1)
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(since)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn top_pages(
        &self,
        since: Option<DateTime<Utc>>,
        limit: i64,
    ) -> Result<Vec<PageVisits>, AppError> {
        let rows = sqlx::query_as::<_, PageVisits>(
            r#"
            SELECT page, COUNT(*) AS count
            FROM visits
            WHERE ($1::timestamptz IS NULL OR "timestamp" > $1)
            GROUP BY page
            ORDER BY count DESC
            LIMIT $2
            "#,
        )
        .bind(since)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;

        Ok(())
    }
}
