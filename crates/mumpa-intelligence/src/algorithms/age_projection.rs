// ABOUTME: Temporal projection of registered age/gestation to the current instant
// ABOUTME: Ceiling elapsed days, floored month/week conversion, gestation clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

use chrono::{DateTime, Utc};
use mumpa_core::constants::gestation::{MAX_GESTATION_WEEKS, MIN_GESTATION_WEEKS};
use mumpa_core::constants::time::{AVG_DAYS_PER_MONTH, DAYS_PER_WEEK_F64, MILLIS_PER_DAY_F64};
use mumpa_core::models::AgeEntry;
use serde::Serialize;

/// Projection of a born child's age to the current instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BornProjection {
    /// Whole days elapsed since registration (ceiling; may be negative under
    /// clock skew)
    pub days_since_creation: i64,
    /// Whole months elapsed since registration (floored)
    pub elapsed_months: i64,
    /// Current age in months, floored at zero
    pub current_age_months: u32,
}

/// Projection of a pregnancy's gestation to the current instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnbornProjection {
    /// Whole days elapsed since registration (ceiling; may be negative under
    /// clock skew)
    pub days_since_creation: i64,
    /// Whole weeks elapsed since registration (floored)
    pub elapsed_weeks: i64,
    /// Current gestation, clamped to the conventional [4, 42] window
    pub current_gestation_weeks: u32,
    /// Whether the unclamped gestation exceeds 42 weeks
    pub is_overdue: bool,
}

/// A registered value advanced forward by elapsed real time.
///
/// Derived, never stored: projections are recomputed on every read so they
/// always reflect "now". The variant mirrors the input `AgeEntry` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectedAge {
    /// Projection of a born child's age
    Born(BornProjection),
    /// Projection of a pregnancy's gestation
    Unborn(UnbornProjection),
}

impl ProjectedAge {
    /// Elapsed whole days since registration, common to both variants
    #[must_use]
    pub const fn days_since_creation(self) -> i64 {
        match self {
            Self::Born(projection) => projection.days_since_creation,
            Self::Unborn(projection) => projection.days_since_creation,
        }
    }
}

/// Whole days elapsed between `created_at` and `now`, rounded up.
///
/// Ceiling, not floor or round: any partial day since registration counts as
/// a full elapsed day, so a record created a few minutes ago already has one
/// elapsed day. Negative under clock skew (`now` before `created_at`).
#[must_use]
pub fn elapsed_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed_ms = now.signed_duration_since(created_at).num_milliseconds();
    (elapsed_ms as f64 / MILLIS_PER_DAY_F64).ceil() as i64
}

/// Project a born child's registered age to the instant `now`.
///
/// Formula: `current = max(0, age_months + floor(elapsed_days / 30.44))`
///
/// The zero floor applies to the final sum only. A large registered age
/// combined with slightly-negative elapsed months still projects to the true
/// sum, not back to the registered value.
#[must_use]
pub fn project_born(
    age_months: u32,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> BornProjection {
    let days_since_creation = elapsed_days(created_at, now);
    let elapsed_months = floor_div(days_since_creation, AVG_DAYS_PER_MONTH);
    BornProjection {
        days_since_creation,
        elapsed_months,
        current_age_months: (i64::from(age_months) + elapsed_months).max(0) as u32,
    }
}

/// Project a pregnancy's registered gestation to the instant `now`.
///
/// Formula: `raw = gestation_weeks + floor(elapsed_days / 7)`;
/// `current = clamp(raw, 4, 42)`; `overdue = raw > 42`
///
/// Overdue is decided on the raw gestation before clamping; the clamped
/// figure alone cannot distinguish week 42 from week 45.
#[must_use]
pub fn project_unborn(
    gestation_weeks: u32,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> UnbornProjection {
    let days_since_creation = elapsed_days(created_at, now);
    let elapsed_weeks = floor_div(days_since_creation, DAYS_PER_WEEK_F64);
    let raw_weeks = i64::from(gestation_weeks) + elapsed_weeks;
    UnbornProjection {
        days_since_creation,
        elapsed_weeks,
        current_gestation_weeks: raw_weeks.clamp(MIN_GESTATION_WEEKS, MAX_GESTATION_WEEKS) as u32,
        is_overdue: raw_weeks > MAX_GESTATION_WEEKS,
    }
}

/// Project a registered age/gestation entry to the instant `now`.
///
/// Dispatches to [`project_born`] / [`project_unborn`] on the entry variant.
/// Pure over its inputs: identical `(entry, created_at, now)` triples yield
/// identical results.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use mumpa_core::models::AgeEntry;
/// use mumpa_intelligence::{project, ProjectedAge};
///
/// let now = Utc::now();
/// let created_at = now - Duration::days(61);
/// let ProjectedAge::Born(projection) =
///     project(AgeEntry::Born { age_months: 11 }, created_at, now)
/// else {
///     unreachable!()
/// };
/// assert_eq!(projection.current_age_months, 13);
/// ```
#[must_use]
pub fn project(entry: AgeEntry, created_at: DateTime<Utc>, now: DateTime<Utc>) -> ProjectedAge {
    match entry {
        AgeEntry::Born { age_months } => {
            ProjectedAge::Born(project_born(age_months, created_at, now))
        }
        AgeEntry::Unborn { gestation_weeks } => {
            ProjectedAge::Unborn(project_unborn(gestation_weeks, created_at, now))
        }
    }
}

/// Floored division of a (possibly negative) day count by a fractional divisor
fn floor_div(days: i64, divisor: f64) -> i64 {
    (days as f64 / divisor).floor() as i64
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_partial_day_counts_as_full_day() {
        let created_at = now() - Duration::minutes(15);
        assert_eq!(elapsed_days(created_at, now()), 1);
    }

    #[test]
    fn test_zero_elapsed_for_identical_instants() {
        assert_eq!(elapsed_days(now(), now()), 0);
    }

    #[test]
    fn test_negative_elapsed_under_clock_skew() {
        let created_at = now() + Duration::days(3);
        assert_eq!(elapsed_days(created_at, now()), -3);
    }

    #[test]
    fn test_born_projection_floors_months() {
        // 61 days = 2.004 average months; floor to 2
        let created_at = now() - Duration::days(61);
        let projection = project_born(11, created_at, now());
        assert_eq!(
            projection,
            BornProjection {
                days_since_creation: 61,
                elapsed_months: 2,
                current_age_months: 13,
            }
        );
    }

    #[test]
    fn test_born_skew_does_not_floor_at_registered_value() {
        // -31 elapsed days floors to -2 months; 11 - 2 = 9, not 11 and not 0
        let created_at = now() + Duration::days(31);
        let projection = project_born(11, created_at, now());
        assert_eq!(projection.current_age_months, 9);
    }

    #[test]
    fn test_born_gross_skew_floors_at_zero() {
        let created_at = now() + Duration::days(365);
        let projection = project_born(2, created_at, now());
        assert_eq!(projection.current_age_months, 0);
    }

    #[test]
    fn test_unborn_overdue_uses_unclamped_weeks() {
        let created_at = now() - Duration::days(28);
        let projection = project_unborn(40, created_at, now());
        assert_eq!(
            projection,
            UnbornProjection {
                days_since_creation: 28,
                elapsed_weeks: 4,
                current_gestation_weeks: 42,
                is_overdue: true,
            }
        );
    }

    #[test]
    fn test_unborn_clamps_to_lower_bound() {
        let created_at = now() + Duration::days(14);
        let projection = project_unborn(4, created_at, now());
        assert_eq!(projection.current_gestation_weeks, 4);
        assert!(!projection.is_overdue);
    }

    #[test]
    fn test_negative_weeks_floor_like_months() {
        // -1 day over 7 floors to -1 week, not 0
        let created_at = now() + Duration::days(1);
        let projection = project_unborn(30, created_at, now());
        assert_eq!(projection.elapsed_weeks, -1);
        assert_eq!(projection.current_gestation_weeks, 29);
    }

    #[test]
    fn test_project_dispatches_on_variant() {
        let created_at = now() - Duration::days(10);
        assert!(matches!(
            project(AgeEntry::Born { age_months: 1 }, created_at, now()),
            ProjectedAge::Born(_)
        ));
        assert!(matches!(
            project(AgeEntry::Unborn { gestation_weeks: 12 }, created_at, now()),
            ProjectedAge::Unborn(_)
        ));
    }
}
