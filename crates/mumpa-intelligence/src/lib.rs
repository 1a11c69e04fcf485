// ABOUTME: Growth intelligence algorithms for the Mumpa platform
// ABOUTME: Age/gestation projection and percentile curve generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

#![deny(unsafe_code)]

//! # Mumpa Intelligence
//!
//! Pure computational core for the Mumpa growth platform. Two independent,
//! stateless components live here:
//!
//! - **Age projection**: advance a record's registered age or gestation to
//!   the current instant, with domain clamping.
//! - **Percentile curves**: materialize growth reference curves (p3/p50/p97)
//!   by linear interpolation between calibration anchors.
//!
//! Neither component performs I/O or holds mutable state; both may be called
//! concurrently without coordination. Persistence and HTTP formatting belong
//! to the callers.

/// Projection and curve-generation algorithms
pub mod algorithms;

pub use algorithms::age_projection::{
    project, project_born, project_unborn, BornProjection, ProjectedAge, UnbornProjection,
};
pub use algorithms::growth_percentiles::build_percentile_curve;
