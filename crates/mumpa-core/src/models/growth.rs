// ABOUTME: Growth percentile curve models and discriminants
// ABOUTME: Sex, MeasurementType, PercentileAnchor, CurvePoint, and the seed document shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex discriminant for percentile curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Female
    #[serde(rename = "F")]
    Female,
    /// Male
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    /// All supported sexes, in seeding order
    pub const ALL: [Self; 2] = [Self::Female, Self::Male];

    /// Short code used in document keys ("F" / "M")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" | "f" => Ok(Self::Female),
            "M" | "m" => Ok(Self::Male),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: F, M"
            ))),
        }
    }
}

/// Growth measurement tracked by percentile curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    /// Body weight (kg)
    Weight,
    /// Body length/height (cm)
    Height,
    /// Head circumference (cm)
    Head,
}

impl MeasurementType {
    /// All supported measurement types, in seeding order
    pub const ALL: [Self; 3] = [Self::Weight, Self::Height, Self::Head];

    /// Lowercase name used in document keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Head => "head",
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "height" => Ok(Self::Height),
            "head" => Ok(Self::Head),
            other => Err(AppError::invalid_input(format!(
                "Unknown measurement type: '{other}'. Valid options: weight, height, head"
            ))),
        }
    }
}

/// A calibration triple of percentile values fixed at a known week offset.
///
/// Used as interpolation endpoints; `p3 <= p50 <= p97` must hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileAnchor {
    /// 3rd percentile value
    pub p3: f64,
    /// 50th percentile (median) value
    pub p50: f64,
    /// 97th percentile value
    pub p97: f64,
}

/// One point of a materialized percentile curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Age in completed weeks
    pub age_weeks: u32,
    /// 3rd percentile value
    pub p3: f64,
    /// 50th percentile (median) value
    pub p50: f64,
    /// 97th percentile value
    pub p97: f64,
}

/// Growth percentile reference document, one per `(measurement, sex)` pair.
///
/// This is the shape the seeding driver persists; the document key is
/// deterministic (`"weight_F"`, `"head_M"`, ...) so re-seeding upserts
/// instead of accumulating rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPercentileDocument {
    /// Document key: `"<type>_<sex>"`
    pub id: String,
    /// Measurement this curve describes
    pub measurement_type: MeasurementType,
    /// Sex this curve describes
    pub sex: Sex,
    /// Ordered curve points, week 0 first
    pub points: Vec<CurvePoint>,
    /// First time this document was seeded
    pub created_at: DateTime<Utc>,
    /// Last time this document was (re-)seeded
    pub updated_at: DateTime<Utc>,
}

impl GrowthPercentileDocument {
    /// Deterministic document key for a `(measurement, sex)` pair
    #[must_use]
    pub fn document_id(measurement: MeasurementType, sex: Sex) -> String {
        format!("{}_{}", measurement.as_str(), sex.as_str())
    }

    /// Create a document for a freshly built curve
    #[must_use]
    pub fn new(
        measurement: MeasurementType,
        sex: Sex,
        points: Vec<CurvePoint>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Self::document_id(measurement, sex),
            measurement_type: measurement,
            sex,
            points,
            created_at: now,
            updated_at: now,
        }
    }
}
