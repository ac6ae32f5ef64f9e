//! Contact form relay service.

use std::sync::Arc;

use crate::domain::entities::{ContactSubmission, OutgoingMail};
use crate::domain::mailer::{MailError, Mailer};

/// Relays contact form submissions to a fixed recipient.
pub struct ContactService<M: Mailer + ?Sized> {
    mailer: Arc<M>,
    recipient: String,
}

impl<M: Mailer + ?Sized> ContactService<M> {
    /// Creates a new contact service delivering to `recipient`.
    pub fn new(mailer: Arc<M>, recipient: impl Into<String>) -> Self {
        Self {
            mailer,
            recipient: recipient.into(),
        }
    }

    pub fn relay(&self) -> String {
        self.mailer.relay()
    }

    /// Composes and sends one message for `submission`.
    ///
    /// # Errors
    ///
    /// Returns the [`MailError`] reported by the mailer.
    pub async fn send(&self, submission: ContactSubmission) -> Result<(), MailError> {
        let mail = OutgoingMail::from_submission(submission, &self.recipient);
        self.mailer.send(mail).await
    }
}
