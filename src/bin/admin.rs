//! CLI administration tool for the visit analytics database.
//!
//! Reads the same `visits` table as the analytics service without going
//! through its HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Totals and top pages for the last week
//! cargo run --bin admin -- stats --period 7d
//!
//! # Latest visits
//! cargo run --bin admin -- recent --limit 20
//!
//! # Check database connection and schema
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*`): PostgreSQL connection settings

use site_backend::application::services::{StatsService, VisitService};
use site_backend::config::DatabaseConfig;
use site_backend::domain::period::Period;
use site_backend::infrastructure::persistence::{PgVisitRepository, connect_pool};
use site_backend::web::handlers::VisitRow;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting recorded visits.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show visit totals and top pages
    Stats {
        /// Time window: 1d, 7d, 30d, 365d or all
        #[arg(short, long, default_value = "all")]
        period: Period,
    },

    /// List the most recent visits
    Recent {
        /// Number of visits to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and the visits table
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database = DatabaseConfig::from_env()?;
    database.validate()?;
    let pool = connect_pool(&database)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats { period } => handle_stats(&pool, period).await?,
        Commands::Recent { limit } => handle_recent(&pool, limit).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> Arc<PgVisitRepository> {
    Arc::new(PgVisitRepository::new(Arc::new(pool.clone())))
}

/// Displays visit totals and the three aggregates for a period.
async fn handle_stats(pool: &PgPool, period: Period) -> Result<()> {
    println!(
        "{} {}",
        "📊 Statistics".bright_blue().bold(),
        format!("({})", period).bright_black()
    );
    println!();

    let service = StatsService::new(repository(pool));

    let total = service.count_visits(period).await?;
    let stats = service.get_stats(period).await?;

    println!("  Visits:      {}", total.to_string().bright_green().bold());
    println!(
        "  Active days: {}",
        stats.visits_over_time.len().to_string().bright_green().bold()
    );
    println!();

    if stats.most_visited_pages.is_empty() {
        println!("{}", "  No visits recorded".yellow());
        println!();
        return Ok(());
    }

    println!("{}", "Per day:".bright_white().bold());
    for row in &stats.visits_over_time {
        println!(
            "  {}  {:>8}",
            row.date.to_string().bright_black(),
            row.count.to_string().bright_green()
        );
    }
    println!();

    println!("{}", "Per hour (UTC):".bright_white().bold());
    for row in &stats.visits_by_hour {
        println!(
            "  {:02}:00  {:>8}",
            row.hour,
            row.count.to_string().bright_green()
        );
    }
    println!();

    println!("{}", "Top pages:".bright_white().bold());
    for row in &stats.most_visited_pages {
        println!(
            "  {:>8}  {}",
            row.count.to_string().bright_green(),
            row.page.as_deref().unwrap_or("(none)").cyan()
        );
    }
    println!();

    Ok(())
}

/// Lists the latest visits, newest first.
async fn handle_recent(pool: &PgPool, limit: i64) -> Result<()> {
    println!("{}", "📋 Recent Visits".bright_blue().bold());
    println!();

    let service = VisitService::new(repository(pool));
    let visits = service.recent_visits_limited(limit).await?;

    if visits.is_empty() {
        println!("{}", "  No visits recorded".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<23}  {:<30}  {:<15}  {}",
        "Time".bright_white().bold(),
        "Page".bright_white().bold(),
        "IP".bright_white().bold(),
        "Browser".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for row in visits.into_iter().map(VisitRow::from) {
        println!(
            "  {:<23}  {:<30}  {:<15}  {}",
            row.time.bright_black(),
            row.page.cyan(),
            row.ip,
            row.browser.bright_black()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());

            let table: Option<String> =
                sqlx::query_scalar("SELECT to_regclass('visits')::text")
                    .fetch_one(pool)
                    .await?;

            if table.is_some() {
                println!("{}", "✅ Table visits present".green().bold());
            } else {
                println!(
                    "{}",
                    "❌ Table visits missing, apply migrations/ first".red().bold()
                );
                anyhow::bail!("visits table not found");
            }
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
