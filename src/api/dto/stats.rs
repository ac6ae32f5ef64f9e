//! DTOs for visit statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::services::VisitStats;
use crate::domain::period::Period;
use crate::domain::repositories::{DailyVisits, HourlyVisits, PageVisits};

pub const STATS_ERROR_MESSAGE: &str = "Failed to load statistics.";

/// Query parameters for `GET /api/stats`, kept as raw key/value pairs.
///
/// Nothing in the query string can be rejected: a single `period` goes
/// through [`Period::from_query`], a missing or repeated one means
/// [`Period::All`].
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct StatsQuery(pub Vec<(String, String)>);

impl StatsQuery {
    pub fn period(&self) -> Period {
        let mut values = self
            .0
            .iter()
            .filter(|(key, _)| key == "period")
            .map(|(_, value)| value.as_str());

        match (values.next(), values.next()) {
            (Some(value), None) => Period::from_query(Some(value)),
            _ => Period::All,
        }
    }
}

/// Response body for `GET /api/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub visits_over_time: Vec<DailyCount>,
    pub visits_by_hour: Vec<HourlyCount>,
    pub most_visited_pages: Vec<PageCount>,
}

#[derive(Debug, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct HourlyCount {
    pub hour: i32,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct PageCount {
    pub page: Option<String>,
    pub count: i64,
}

/// Failure body for `GET /api/stats`.
#[derive(Debug, Serialize)]
pub struct StatsErrorBody {
    pub error: &'static str,
}

impl From<DailyVisits> for DailyCount {
    fn from(v: DailyVisits) -> Self {
        Self {
            date: v.date,
            count: v.count,
        }
    }
}

impl From<HourlyVisits> for HourlyCount {
    fn from(v: HourlyVisits) -> Self {
        Self {
            hour: v.hour,
            count: v.count,
        }
    }
}

impl From<PageVisits> for PageCount {
    fn from(v: PageVisits) -> Self {
        Self {
            page: v.page,
            count: v.count,
        }
    }
}

impl From<VisitStats> for StatsResponse {
    fn from(stats: VisitStats) -> Self {
        Self {
            visits_over_time: stats.visits_over_time.into_iter().map(Into::into).collect(),
            visits_by_hour: stats.visits_by_hour.into_iter().map(Into::into).collect(),
            most_visited_pages: stats
                .most_visited_pages
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
