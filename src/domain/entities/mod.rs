//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Visit`] - One logged page access, append-only
//! - [`ContactSubmission`] - A contact form post, used once and never stored
//! - [`OutgoingMail`] - The message composed from a submission
//!
//! Creation data lives in separate structs (`NewVisit`) because the
//! timestamp is assigned by the database at insert time.

pub mod contact;
pub mod visit;

pub use contact::{ContactSubmission, OutgoingMail};
pub use visit::{NewVisit, Visit};
