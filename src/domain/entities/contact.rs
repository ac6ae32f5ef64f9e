//! Contact form submission and the mail composed from it.

/// Subject line prefix; the sender's name follows it.
pub const SUBJECT_PREFIX: &str = "Message from";

/// A contact form post as received from the client.
///
/// Nothing is validated: the address is only checked implicitly when the
/// outgoing message is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A plain-text message ready to be handed to a [`crate::domain::mailer::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    /// Composes the relay message for a submission.
    ///
    /// The submitter's address becomes the sender, the fixed recipient the
    /// destination, and the subject is derived from the submitter's name.
    pub fn from_submission(submission: ContactSubmission, recipient: &str) -> Self {
        Self {
            subject: format!("{} {}", SUBJECT_PREFIX, submission.name),
            from: submission.email,
            to: recipient.to_string(),
            body: submission.message,
        }
    }
}
