//! Recent visits table.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::Visit;
use crate::error::AppError;
use crate::state::AnalyticsState;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One table row. Missing values render as empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRow {
    pub time: String,
    pub page: String,
    pub ip: String,
    pub browser: String,
}

impl From<Visit> for VisitRow {
    fn from(visit: Visit) -> Self {
        Self {
            time: visit.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            page: visit.page.unwrap_or_default(),
            ip: visit.ip.unwrap_or_default(),
            browser: visit.user_agent.unwrap_or_default(),
        }
    }
}

/// Renders `templates/admin.html`.
///
/// Cell values are HTML-escaped by the template engine, so markup stored
/// in `page` or `user_agent` is shown as text.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub rows: Vec<VisitRow>,
}

/// Renders the 50 most recent visits, newest first.
///
/// # Endpoint
///
/// `GET /admin`
///
/// # Errors
///
/// Returns `500` with a plain-text body if the query fails.
pub async fn admin_handler(
    State(state): State<AnalyticsState>,
) -> Result<AdminTemplate, AppError> {
    let visits = state.visit_service.recent_visits().await?;

    Ok(AdminTemplate {
        rows: visits.into_iter().map(VisitRow::from).collect(),
    })
}
