// ABOUTME: Growth percentile seeding utility for the Mumpa backend
// ABOUTME: Builds the six reference curves and upserts them into the document store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

//! Growth percentile seeder for the Mumpa backend.
//!
//! This binary materializes the growth percentile reference curves (weight,
//! height, and head circumference for each sex) and upserts one document per
//! `(measurement, sex)` pair. Re-running converges to the same store state:
//! the upsert preserves `created_at` and rewrites `points`/`updated_at`.
//!
//! Usage:
//! ```bash
//! # Seed percentile curves (uses DATABASE_URL from environment)
//! cargo run --bin seed-growth-percentiles
//!
//! # Override database URL
//! cargo run --bin seed-growth-percentiles -- --database-url sqlite:./data/mumpa.db
//!
//! # Verbose output
//! cargo run --bin seed-growth-percentiles -- -v
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use mumpa_admin::seeding;
use sqlx::SqlitePool;
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-growth-percentiles",
    about = "Mumpa Growth Percentile Seeder",
    long_about = "Create the growth percentile reference curves (p3/p50/p97) for the Mumpa backend"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Mumpa Growth Percentile Seeder ===");

    // Load database URL
    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/mumpa.db".into());

    info!("Connecting to database: {}", database_url);
    let connection_url = format!("{database_url}?mode=rwc");
    let pool = SqlitePool::connect(&connection_url).await?;

    seeding::ensure_schema(&pool).await?;

    info!("Seeding growth percentile curves...");
    let seeded = seeding::seed_all_curves(&pool, Utc::now()).await?;

    info!("");
    info!("=== Seeding Complete ===");
    info!("Upserted {} growth percentile documents", seeded);

    Ok(())
}
