//! Relative time windows for statistics queries.

use chrono::{DateTime, Duration, Months, Utc};
use std::fmt;
use std::str::FromStr;

/// A named relative time window bounding aggregate queries.
///
/// | Value  | Lower bound          |
/// |--------|----------------------|
/// | `1d`   | now - 1 day          |
/// | `7d`   | now - 7 days         |
/// | `30d`  | now - 30 days        |
/// | `365d` | now - 1 calendar year|
/// | `all`  | none                 |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
    #[default]
    All,
}

/// Returned by the strict [`FromStr`] conversion.
#[derive(Debug, thiserror::Error)]
#[error("unknown period '{0}', expected one of: 1d, 7d, 30d, 365d, all")]
pub struct UnknownPeriod(pub String);

impl Period {
    pub const ALL_VALUES: [Period; 5] = [
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Year,
        Period::All,
    ];

    /// Interprets the `period` query parameter.
    ///
    /// Missing and unrecognized values both mean [`Period::All`].
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "1d",
            Period::Week => "7d",
            Period::Month => "30d",
            Period::Year => "365d",
            Period::All => "all",
        }
    }

    /// Exclusive lower bound on `timestamp` relative to `now`.
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Period::Day => Some(now - Duration::days(1)),
            Period::Week => Some(now - Duration::days(7)),
            Period::Month => Some(now - Duration::days(30)),
            Period::Year => now.checked_sub_months(Months::new(12)),
            Period::All => None,
        }
    }
}

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL_VALUES
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPeriod(s.to_string()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
