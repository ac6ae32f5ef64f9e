//! HTTP server initialization and runtime setup.
//!
//! Builds the external clients once, wires them into handler state and runs
//! the Axum server until Ctrl+C or SIGTERM.

use crate::config::{AnalyticsConfig, ContactConfig};
use crate::infrastructure::mail::SmtpMailer;
use crate::infrastructure::persistence::{PgVisitRepository, connect_pool};
use crate::routes::{analytics_router, contact_router};
use crate::state::{AnalyticsState, ContactState};

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the visit analytics service.
///
/// The `visits` table must already exist; schema management is external.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run_analytics(config: AnalyticsConfig) -> Result<()> {
    let pool = connect_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let repository = Arc::new(PgVisitRepository::new(Arc::new(pool)));
    let state = AnalyticsState::new(repository);

    let app = analytics_router(state, &config.static_dir);

    serve(app, &config.server.listen_addr()).await
}

/// Runs the contact relay service.
///
/// # Errors
///
/// Returns an error if:
/// - The SMTP transport cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run_contact(config: ContactConfig) -> Result<()> {
    let mailer = SmtpMailer::new(&config.smtp).context("Failed to configure SMTP transport")?;
    tracing::info!("SMTP relay configured: {}", config.smtp.host);

    let state = ContactState::new(Arc::new(mailer), config.recipient.clone());

    let app = contact_router(state);

    serve(app, &config.server.listen_addr()).await
}

async fn serve(app: Router, listen_addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
