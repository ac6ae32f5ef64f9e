//! HTML template rendering handlers.

mod admin;

pub use admin::{AdminTemplate, VisitRow, admin_handler};
