// ABOUTME: Manual check harness for age/gestation projection
// ABOUTME: Projects a hand-entered record against the current wall clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

//! Manual age projection checker.
//!
//! Hand-run harness for sanity-checking the projection arithmetic the API
//! applies to child records: supply a registered age or gestation plus a
//! creation time, and see the stored and projected figures side by side.
//!
//! Usage:
//! ```bash
//! # A child registered at 11 months, 61 days ago
//! cargo run --bin check-age-projection -- --age-months 11 --created-days-ago 61
//!
//! # A pregnancy registered at 39 weeks, two weeks ago
//! cargo run --bin check-age-projection -- --gestation-weeks 39 --created-days-ago 14
//!
//! # Exact creation timestamp
//! cargo run --bin check-age-projection -- --age-months 3 --created-at 2025-04-01T09:30:00Z
//! ```

use anyhow::{bail, Result};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use mumpa_admin::formatters::ChildAgeResponse;
use mumpa_admin::logging::LoggingConfig;
use mumpa_admin::models::{AgeEntry, ChildRecord};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "check-age-projection",
    about = "Mumpa Age Projection Checker",
    long_about = "Project a registered age or gestation to the current instant, the way the API does on every read"
)]
struct CheckArgs {
    /// Registered age in months (born record)
    #[arg(long, conflicts_with = "gestation_weeks")]
    age_months: Option<u32>,

    /// Registered gestation in weeks (unborn record)
    #[arg(long)]
    gestation_weeks: Option<u32>,

    /// Days before now the record was created
    #[arg(long, conflicts_with = "created_at")]
    created_days_ago: Option<i64>,

    /// Exact creation timestamp (RFC 3339)
    #[arg(long)]
    created_at: Option<String>,
}

fn main() -> Result<()> {
    let args = CheckArgs::parse();
    LoggingConfig::from_env().init()?;

    let age = if let Some(age_months) = args.age_months {
        AgeEntry::Born { age_months }
    } else if let Some(gestation_weeks) = args.gestation_weeks {
        AgeEntry::Unborn { gestation_weeks }
    } else {
        bail!("one of --age-months or --gestation-weeks is required");
    };

    let now = Utc::now();
    let created_at = if let Some(stamp) = args.created_at {
        DateTime::parse_from_rfc3339(&stamp)?.with_timezone(&Utc)
    } else if let Some(days) = args.created_days_ago {
        now - Duration::days(days)
    } else {
        now
    };

    let record = ChildRecord {
        id: "manual-check".into(),
        name: None,
        age,
        created_at,
    };
    record.validate(now)?;

    let response = ChildAgeResponse::from_record(&record, now);
    info!("projected at {}", now.to_rfc3339());
    info!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
