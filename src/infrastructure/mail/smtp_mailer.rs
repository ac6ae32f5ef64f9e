//! SMTP relay mailer.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::domain::entities::OutgoingMail;
use crate::domain::mailer::{MailError, Mailer};

/// Mailer backed by a pooled async SMTP transport.
///
/// The transport is built once at startup and shared by every request.
/// With `starttls` the connection is upgraded on the submission port
/// (587); without it the relay is spoken to in plaintext, which is only
/// meant for local development relays.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    relay: String,
}

impl SmtpMailer {
    /// Builds the transport. No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Transport`] if the TLS parameters for `host`
    /// cannot be constructed.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            relay: format!("{}:{}", config.host, config.port),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let message = build_message(&mail)?;
        let response = self.transport.send(message).await?;

        tracing::debug!(
            relay = %self.relay,
            code = %response.code(),
            "Message accepted by relay"
        );

        Ok(())
    }

    fn relay(&self) -> String {
        self.relay.clone()
    }
}

/// Converts an [`OutgoingMail`] into a plain-text MIME message.
///
/// # Errors
///
/// Returns [`MailError::Address`] if the sender or recipient does not parse
/// as a mailbox, [`MailError::Build`] if the message cannot be assembled.
pub fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
    let message = Message::builder()
        .from(parse_mailbox(&mail.from)?)
        .to(parse_mailbox(&mail.to)?)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(mail.body.clone())?;

    Ok(message)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}
