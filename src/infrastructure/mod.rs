//! Infrastructure layer for external integrations.
//!
//! Implements the domain traits against the two external dependencies.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementation and pool setup
//! - [`mail`] - SMTP relay implementation

pub mod mail;
pub mod persistence;
