//! Domain layer containing business entities and contracts.
//!
//! This module defines the data model of both services and the traits the
//! infrastructure layer implements. It has no knowledge of HTTP, SQL or SMTP.
//!
//! # Architecture
//!
//! - [`entities`] - Visits and contact submissions
//! - [`period`] - Relative time windows used to bound statistics
//! - [`repositories`] - Data access trait for the `visits` table
//! - [`mailer`] - Outbound mail trait and its error type
//!
//! # Request Flow
//!
//! 1. HTTP handler extracts request data into an entity
//! 2. Application service calls a repository or mailer trait
//! 3. Infrastructure implementation performs the single external call

pub mod entities;
pub mod mailer;
pub mod period;
pub mod repositories;
