//! Outbound mail implementations.
//!
//! - [`SmtpMailer`] - Sends through an SMTP relay with lettre's async transport

pub mod smtp_mailer;

pub use smtp_mailer::{SmtpMailer, build_message};
