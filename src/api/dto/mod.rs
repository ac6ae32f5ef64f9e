//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Request DTOs
//! accept missing fields and any JSON value where text is expected: none of
//! the endpoints validate their input.

pub mod contact;
pub mod health;
pub mod lenient;
pub mod stats;
pub mod visit;
