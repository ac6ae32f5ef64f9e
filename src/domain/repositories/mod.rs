//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; the PostgreSQL
//! implementation lives in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`VisitRepository`] - Visit recording, recent listing and aggregates
//!
//! See integration tests in `tests/repository_visit.rs` for usage examples.

pub mod visit_repository;

pub use visit_repository::{DailyVisits, HourlyVisits, PageVisits, VisitRepository};

#[cfg(test)]
pub use visit_repository::MockVisitRepository;
