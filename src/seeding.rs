// ABOUTME: Growth percentile seeding against the document store
// ABOUTME: Schema bootstrap and merge-semantics upsert of percentile curve documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

//! Growth Percentile Seeding
//!
//! Persists one reference document per `(measurement, sex)` pair, keyed
//! `"<type>_<sex>"`. The upsert rewrites `points` and `updated_at` but
//! preserves the original `created_at`, so re-seeding is idempotent: running
//! the seeder twice converges to the same store state instead of
//! accumulating rows or resetting history.

use chrono::{DateTime, Utc};
use mumpa_core::constants::curves::DEFAULT_CURVE_HORIZON_WEEKS;
use mumpa_core::errors::{AppError, AppResult};
use mumpa_core::models::{GrowthPercentileDocument, MeasurementType, Sex};
use mumpa_intelligence::build_percentile_curve;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Create the growth percentile table when it does not exist yet
///
/// # Errors
///
/// Returns `AppError::DatabaseError` when the DDL statement fails
pub async fn ensure_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS growth_percentiles (
            id TEXT PRIMARY KEY,
            measurement_type TEXT NOT NULL,
            sex TEXT NOT NULL,
            points TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    Ok(())
}

/// Upsert one percentile document with merge semantics.
///
/// On conflict the existing row keeps its `created_at`; only `points` and
/// `updated_at` are rewritten.
///
/// # Errors
///
/// Returns `AppError::SerializationError` when the points fail to encode and
/// `AppError::DatabaseError` when the write fails
pub async fn upsert_percentile_document(
    pool: &SqlitePool,
    document: &GrowthPercentileDocument,
) -> AppResult<()> {
    let points_json = serde_json::to_string(&document.points)?;

    sqlx::query(
        r"
        INSERT INTO growth_percentiles (
            id, measurement_type, sex, points, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT(id) DO UPDATE SET
            points = excluded.points,
            updated_at = excluded.updated_at
        ",
    )
    .bind(&document.id)
    .bind(document.measurement_type.as_str())
    .bind(document.sex.as_str())
    .bind(&points_json)
    .bind(document.created_at.to_rfc3339())
    .bind(document.updated_at.to_rfc3339())
    .execute(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    Ok(())
}

/// Build and upsert the reference curve for every `(measurement, sex)` pair.
///
/// Pairs without calibration data produce empty curves and are skipped with
/// a warning rather than written as zero-length documents. Returns the
/// number of documents written.
///
/// # Errors
///
/// Returns the first upsert error encountered
pub async fn seed_all_curves(pool: &SqlitePool, now: DateTime<Utc>) -> AppResult<usize> {
    let mut seeded = 0;

    for measurement in MeasurementType::ALL {
        for sex in Sex::ALL {
            let points = build_percentile_curve(measurement, sex, DEFAULT_CURVE_HORIZON_WEEKS);
            if points.is_empty() {
                warn!(
                    measurement = %measurement,
                    sex = %sex,
                    "no calibration data for pair, skipping"
                );
                continue;
            }

            let document = GrowthPercentileDocument::new(measurement, sex, points, now);
            upsert_percentile_document(pool, &document).await?;
            info!("  ✓ {}", document.id);
            seeded += 1;
        }
    }

    Ok(seeded)
}
