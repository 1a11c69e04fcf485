// ABOUTME: API response formatters for child records with live projected figures
// ABOUTME: Pairs stored registration fields with freshly projected age/gestation values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

//! Child Record Response Formatting
//!
//! The backend serves child records with both the stored registration-time
//! figures and the projected live figures side by side, so clients can show
//! "registered at 11 months, currently 13 months" without recomputing. The
//! projection is evaluated fresh against the supplied clock on every call —
//! never cached, never persisted.
//!
//! Field names follow the API contract (`ageInMonths`, `currentAgeInMonths`,
//! ...), and fields irrelevant to the record's variant are omitted from the
//! serialized output entirely.

use chrono::{DateTime, Utc};
use mumpa_core::models::{AgeEntry, ChildRecord};
use mumpa_intelligence::{project_born, project_unborn};
use serde::Serialize;

/// API response shape for a child record with projected figures
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAgeResponse {
    /// Document identifier
    pub id: String,
    /// Display name, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stored age in months at registration (born records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_in_months: Option<u32>,
    /// Projected current age in months (born records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_age_in_months: Option<u32>,
    /// Stored gestation weeks at registration (unborn records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gestation_weeks: Option<u32>,
    /// Projected current gestation weeks (unborn records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_gestation_weeks: Option<u32>,
    /// Whole days elapsed since registration
    pub days_since_creation: i64,
    /// Whether the pregnancy has passed 42 weeks (unborn records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_overdue: Option<bool>,
}

impl ChildAgeResponse {
    /// Build the response for a record, projecting against `now`
    #[must_use]
    pub fn from_record(record: &ChildRecord, now: DateTime<Utc>) -> Self {
        match record.age {
            AgeEntry::Born { age_months } => {
                let projection = project_born(age_months, record.created_at, now);
                Self {
                    id: record.id.clone(),
                    name: record.name.clone(),
                    age_in_months: Some(age_months),
                    current_age_in_months: Some(projection.current_age_months),
                    gestation_weeks: None,
                    current_gestation_weeks: None,
                    days_since_creation: projection.days_since_creation,
                    is_overdue: None,
                }
            }
            AgeEntry::Unborn { gestation_weeks } => {
                let projection = project_unborn(gestation_weeks, record.created_at, now);
                Self {
                    id: record.id.clone(),
                    name: record.name.clone(),
                    age_in_months: None,
                    current_age_in_months: None,
                    gestation_weeks: Some(gestation_weeks),
                    current_gestation_weeks: Some(projection.current_gestation_weeks),
                    days_since_creation: projection.days_since_creation,
                    is_overdue: Some(projection.is_overdue),
                }
            }
        }
    }
}
