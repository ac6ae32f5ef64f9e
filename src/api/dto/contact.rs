//! DTOs for the contact form relay.

use serde::{Deserialize, Serialize};

use crate::api::dto::lenient;
use crate::domain::entities::ContactSubmission;

pub const SENT_MESSAGE: &str = "Email sent!";
pub const FAILED_MESSAGE: &str = "Failed to send email.";

/// Request body for `POST /send`.
///
/// Missing or `null` fields become empty strings and other non-string
/// values their JSON text; an empty or malformed `email` surfaces later as
/// a send failure.
#[derive(Debug, Default, Deserialize)]
pub struct SendRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,
}

impl From<SendRequest> for ContactSubmission {
    fn from(req: SendRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            message: req.message,
        }
    }
}

/// Response body for `POST /send`, on success and on failure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendResponse {
    pub success: bool,
    pub message: String,
}

impl SendResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: FAILED_MESSAGE.to_string(),
        }
    }
}
