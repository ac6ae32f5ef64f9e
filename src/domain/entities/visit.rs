//! Visit entity representing a single logged page access.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted page visit.
///
/// Rows are immutable once written. Every text column is nullable: the page
/// comes straight from the client and the network details may be missing.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Visit {
    pub timestamp: DateTime<Utc>,
    pub page: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Input data for recording a visit.
///
/// The timestamp is not part of it: the database assigns `NOW()` on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVisit {
    pub page: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl NewVisit {
    pub fn new(page: Option<String>, ip: Option<String>, user_agent: Option<String>) -> Self {
        Self {
            page,
            ip,
            user_agent,
        }
    }
}
