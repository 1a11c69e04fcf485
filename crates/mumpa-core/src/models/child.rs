// ABOUTME: Child and pregnancy record models with registration-time age data
// ABOUTME: AgeEntry tagged variant and ChildRecord with upstream validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

use crate::constants::gestation::MAX_REGISTERED_GESTATION_WEEKS;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Registered age data of a record at creation time.
///
/// A record is either a born child with an age in months, or a pregnancy
/// with a gestation in weeks. Each case carries only the field relevant to
/// it, so a born record with gestation weeks cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use mumpa_core::models::AgeEntry;
///
/// let born = AgeEntry::Born { age_months: 11 };
/// let unborn = AgeEntry::Unborn { gestation_weeks: 39 };
/// assert_ne!(born, unborn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgeEntry {
    /// A born child, registered with an age in months
    Born {
        /// Age in months at registration time
        age_months: u32,
    },
    /// A pregnancy, registered with a gestation in weeks
    Unborn {
        /// Completed gestation weeks at registration time
        gestation_weeks: u32,
    },
}

/// A registered child or pregnancy record.
///
/// Mirrors the stored document: the registered age data is frozen at
/// creation time, and live figures are recomputed from `created_at` on every
/// read rather than persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildRecord {
    /// Document identifier
    pub id: String,
    /// Display name, if the parent provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Registered age data
    #[serde(flatten)]
    pub age: AgeEntry,
    /// Moment the record was registered
    pub created_at: DateTime<Utc>,
}

impl ChildRecord {
    /// Validate the record's registration data against `now`.
    ///
    /// The projection core does not sanitize malformed input; callers reject
    /// it here first. A record fails validation when its registered
    /// gestation exceeds the conventional window, or when its creation
    /// timestamp lies more than a day in the future (gross clock skew).
    ///
    /// # Errors
    ///
    /// Returns `AppError::ValueOutOfRange` for a gestation outside [0, 42]
    /// and `AppError::InvalidInput` for a future creation timestamp.
    pub fn validate(&self, now: DateTime<Utc>) -> AppResult<()> {
        if let AgeEntry::Unborn { gestation_weeks } = self.age {
            if gestation_weeks > MAX_REGISTERED_GESTATION_WEEKS {
                return Err(AppError::value_out_of_range(format!(
                    "Registered gestation {gestation_weeks} weeks exceeds the conventional window (0-{MAX_REGISTERED_GESTATION_WEEKS})"
                )));
            }
        }

        if self.created_at > now + Duration::days(1) {
            return Err(AppError::invalid_input(format!(
                "Record {} was created in the future ({})",
                self.id,
                self.created_at.to_rfc3339()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn record(age: AgeEntry, created_at: DateTime<Utc>) -> ChildRecord {
        ChildRecord {
            id: "child_1".to_owned(),
            name: None,
            age,
            created_at,
        }
    }

    #[test]
    fn test_validate_accepts_conventional_gestation() {
        let now = Utc::now();
        let rec = record(AgeEntry::Unborn { gestation_weeks: 39 }, now);
        assert!(rec.validate(now).is_ok());
    }

    #[test]
    fn test_validate_rejects_gestation_beyond_window() {
        let now = Utc::now();
        let rec = record(AgeEntry::Unborn { gestation_weeks: 55 }, now);
        let err = rec.validate(now).unwrap_err();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn test_validate_rejects_future_creation() {
        let now = Utc::now();
        let rec = record(
            AgeEntry::Born { age_months: 2 },
            now + Duration::days(30),
        );
        assert!(rec.validate(now).is_err());
    }

    #[test]
    fn test_age_entry_serde_tagging() {
        let entry = AgeEntry::Unborn { gestation_weeks: 12 };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"kind\":\"unborn\""));
        assert!(json.contains("\"gestation_weeks\":12"));

        let back: AgeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
