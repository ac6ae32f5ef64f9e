//! DTOs for visit logging.

use serde::Deserialize;

use crate::api::dto::lenient;

/// Request body for `POST /log`.
///
/// `page` is optional and stored verbatim, whatever it contains. Non-string
/// JSON values are stored in their JSON text form.
#[derive(Debug, Default, Deserialize)]
pub struct LogVisitRequest {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub page: Option<String>,
}
