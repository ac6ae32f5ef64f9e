//! Outbound mail contract.

use crate::domain::entities::OutgoingMail;
use async_trait::async_trait;

/// Failure while composing or relaying a message.
///
/// Callers never branch on the variant; it only feeds the server log.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivers one message through an external relay.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::SmtpMailer`] - SMTP relay via lettre
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends the message once. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] if the message cannot be built or the relay
    /// rejects or cannot be reached.
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;

    /// Human-readable description of the relay, for health output.
    fn relay(&self) -> String;
}
