//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgVisitRepository`] - Visit recording and analytics queries

pub mod pg_visit_repository;
pub mod pool;

pub use pg_visit_repository::PgVisitRepository;
pub use pool::connect_pool;
