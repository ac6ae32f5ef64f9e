//! Application layer services implementing the request use cases.
//!
//! Services consume domain traits and give HTTP handlers (and the admin
//! CLI) a small API that hides the repository and mailer details.
//!
//! # Available Services
//!
//! - [`services::visit_service::VisitService`] - Visit logging and the recent-visits listing
//! - [`services::stats_service::StatsService`] - Period-filtered aggregates
//! - [`services::contact_service::ContactService`] - Contact form relay

pub mod services;
