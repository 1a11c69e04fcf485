// ABOUTME: Growth percentile curve generation by linear interpolation
// ABOUTME: Hardcoded calibration anchors per (measurement, sex) and the curve builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

use mumpa_core::models::{CurvePoint, MeasurementType, PercentileAnchor, Sex};
use tracing::warn;

/// Calibration entry: interpolation endpoints for one `(measurement, sex)` pair
#[derive(Debug, Clone, Copy)]
struct CurveCalibration {
    measurement: MeasurementType,
    sex: Sex,
    /// Anchor at week 0
    start: PercentileAnchor,
    /// Anchor at the end of the default horizon (week 26)
    end: PercentileAnchor,
}

/// WHO-style 0-26 week reference anchors. Domain constants, not computed;
/// `p3 <= p50 <= p97` must hold at both ends of every entry.
const CALIBRATION: &[CurveCalibration] = &[
    CurveCalibration {
        measurement: MeasurementType::Weight,
        sex: Sex::Female,
        start: PercentileAnchor {
            p3: 2.4,
            p50: 3.2,
            p97: 4.2,
        },
        end: PercentileAnchor {
            p3: 5.8,
            p50: 7.3,
            p97: 9.2,
        },
    },
    CurveCalibration {
        measurement: MeasurementType::Weight,
        sex: Sex::Male,
        start: PercentileAnchor {
            p3: 2.5,
            p50: 3.3,
            p97: 4.3,
        },
        end: PercentileAnchor {
            p3: 6.4,
            p50: 7.9,
            p97: 9.7,
        },
    },
    CurveCalibration {
        measurement: MeasurementType::Height,
        sex: Sex::Female,
        start: PercentileAnchor {
            p3: 45.6,
            p50: 49.1,
            p97: 52.7,
        },
        end: PercentileAnchor {
            p3: 61.5,
            p50: 65.7,
            p97: 70.0,
        },
    },
    CurveCalibration {
        measurement: MeasurementType::Height,
        sex: Sex::Male,
        start: PercentileAnchor {
            p3: 46.3,
            p50: 49.9,
            p97: 53.4,
        },
        end: PercentileAnchor {
            p3: 63.6,
            p50: 67.6,
            p97: 71.6,
        },
    },
    CurveCalibration {
        measurement: MeasurementType::Head,
        sex: Sex::Female,
        start: PercentileAnchor {
            p3: 32.0,
            p50: 33.9,
            p97: 35.8,
        },
        end: PercentileAnchor {
            p3: 40.3,
            p50: 42.2,
            p97: 44.1,
        },
    },
    CurveCalibration {
        measurement: MeasurementType::Head,
        sex: Sex::Male,
        start: PercentileAnchor {
            p3: 32.4,
            p50: 34.5,
            p97: 36.6,
        },
        end: PercentileAnchor {
            p3: 41.5,
            p50: 43.3,
            p97: 45.2,
        },
    },
];

/// Look up the `(start, end)` calibration anchors for a pair.
///
/// Returns `None` when the calibration table carries no entry for the pair;
/// callers treat that as "no calibration data available", not as an error.
#[must_use]
pub fn calibration_anchors(
    measurement: MeasurementType,
    sex: Sex,
) -> Option<(PercentileAnchor, PercentileAnchor)> {
    CALIBRATION
        .iter()
        .find(|entry| entry.measurement == measurement && entry.sex == sex)
        .map(|entry| (entry.start, entry.end))
}

/// Materialize a percentile reference curve for a `(measurement, sex)` pair.
///
/// Emits `total_weeks + 1` points for weeks `0..=total_weeks`, each band
/// interpolated linearly and independently between the pair's calibration
/// anchors: `value = start + (end - start) * week / total_weeks`. With
/// `total_weeks == 0` the ratio is defined as zero and the single emitted
/// point equals the start anchor.
///
/// Deterministic: repeated calls with the same arguments produce
/// bit-identical output. A pair without calibration data yields an empty
/// vector — the only failure condition.
///
/// # Example
///
/// ```rust
/// use mumpa_core::models::{MeasurementType, Sex};
/// use mumpa_intelligence::build_percentile_curve;
///
/// let curve = build_percentile_curve(MeasurementType::Weight, Sex::Female, 26);
/// assert_eq!(curve.len(), 27);
/// assert_eq!(curve[0].age_weeks, 0);
/// ```
#[must_use]
pub fn build_percentile_curve(
    measurement: MeasurementType,
    sex: Sex,
    total_weeks: u32,
) -> Vec<CurvePoint> {
    let Some((start, end)) = calibration_anchors(measurement, sex) else {
        warn!(
            measurement = %measurement,
            sex = %sex,
            "no calibration anchors for pair, returning empty curve"
        );
        return Vec::new();
    };

    let mut points = Vec::with_capacity(total_weeks as usize + 1);
    for week in 0..=total_weeks {
        let ratio = if total_weeks == 0 {
            0.0
        } else {
            f64::from(week) / f64::from(total_weeks)
        };
        points.push(CurvePoint {
            age_weeks: week,
            p3: interpolate(start.p3, end.p3, ratio),
            p50: interpolate(start.p50, end.p50, ratio),
            p97: interpolate(start.p97, end.p97, ratio),
        });
    }
    points
}

/// Linear interpolation between two band values
fn interpolate(start: f64, end: f64, ratio: f64) -> f64 {
    (end - start).mul_add(ratio, start)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_all_pairs_have_ordered_anchors() {
        for measurement in MeasurementType::ALL {
            for sex in Sex::ALL {
                let (start, end) = calibration_anchors(measurement, sex).unwrap();
                assert!(start.p3 <= start.p50 && start.p50 <= start.p97);
                assert!(end.p3 <= end.p50 && end.p50 <= end.p97);
            }
        }
    }

    #[test]
    fn test_zero_horizon_emits_single_start_point() {
        let curve = build_percentile_curve(MeasurementType::Weight, Sex::Male, 0);
        assert_eq!(curve.len(), 1);

        let (start, _) = calibration_anchors(MeasurementType::Weight, Sex::Male).unwrap();
        assert_eq!(curve[0].age_weeks, 0);
        assert!((curve[0].p50 - start.p50).abs() < f64::EPSILON);
    }

    #[test]
    fn test_midpoint_interpolates_halfway() {
        let curve = build_percentile_curve(MeasurementType::Height, Sex::Female, 2);
        let (start, end) = calibration_anchors(MeasurementType::Height, Sex::Female).unwrap();

        let expected_mid = f64::midpoint(start.p50, end.p50);
        assert!((curve[1].p50 - expected_mid).abs() < 1e-9);
    }
}
