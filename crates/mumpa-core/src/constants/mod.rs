// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Mumpa growth platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

//! Constants module
//!
//! This module organizes application constants by domain. Constants are
//! grouped into logical domains rather than being in a single large file.

/// Time conversion constants used by age projection
pub mod time {
    /// Milliseconds per day, as f64 for elapsed-day arithmetic
    pub const MILLIS_PER_DAY_F64: f64 = 86_400_000.0;
    /// Average month length in days (365.25 / 12)
    pub const AVG_DAYS_PER_MONTH: f64 = 30.44;
    /// Days per week
    pub const DAYS_PER_WEEK_F64: f64 = 7.0;
}

/// Gestation window constants
pub mod gestation {
    /// Lower clamp bound for a projected gestation (weeks)
    pub const MIN_GESTATION_WEEKS: i64 = 4;
    /// Upper clamp bound for a projected gestation (weeks); beyond this a
    /// pregnancy is overdue
    pub const MAX_GESTATION_WEEKS: i64 = 42;
    /// Largest gestation accepted at registration time (weeks)
    pub const MAX_REGISTERED_GESTATION_WEEKS: u32 = 42;
}

/// Percentile curve constants
pub mod curves {
    /// Default curve horizon: weeks 0 through 26 inclusive
    pub const DEFAULT_CURVE_HORIZON_WEEKS: u32 = 26;
}

/// Service names for structured logging
pub mod service_names {
    /// Admin tooling service name
    pub const MUMPA_ADMIN: &str = "mumpa-admin";
}
