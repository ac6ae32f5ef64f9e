//! Handler for aggregated visit statistics.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::stats::{STATS_ERROR_MESSAGE, StatsErrorBody, StatsQuery, StatsResponse};
use crate::state::AnalyticsState;

/// Returns visit counts per day, per hour and for the top pages.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Query Parameters
///
/// - `period` (optional): `1d`, `7d`, `30d`, `365d` or `all` (default).
///   Any other value, or a repeated `period`, is treated as `all`.
///
/// # Response
///
/// ```json
/// {
///   "visitsOverTime": [{ "date": "2024-05-01", "count": 12 }],
///   "visitsByHour": [{ "hour": 14, "count": 5 }],
///   "mostVisitedPages": [{ "page": "/home", "count": 9 }]
/// }
/// ```
///
/// # Errors
///
/// Returns `500` with `{"error": "..."}` if any of the three queries fails.
pub async fn stats_handler(
    State(state): State<AnalyticsState>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, (StatusCode, Json<StatsErrorBody>)> {
    let period = params.period();

    match state.stats_service.get_stats(period).await {
        Ok(stats) => Ok(Json(stats.into())),
        Err(e) => {
            tracing::error!(error = %e, %period, "Failed to load statistics");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatsErrorBody {
                    error: STATS_ERROR_MESSAGE,
                }),
            ))
        }
    }
}
