//! Visit analytics service.

use anyhow::Result;
use site_backend::{config, server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_analytics_from_env()?;

    telemetry::init(&config.server.log_level, &config.server.log_format);
    config.print_summary();

    server::run_analytics(config).await
}
