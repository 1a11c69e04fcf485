// ABOUTME: Core data models for the Mumpa growth platform
// ABOUTME: Re-exports ChildRecord, AgeEntry, Sex, MeasurementType and curve types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

//! # Data Models
//!
//! This module contains the core data structures used throughout the Mumpa
//! admin tooling. The models mirror the documents the backend stores, with
//! one deliberate strengthening: the Born/Unborn distinction, expressed in
//! the stored documents via presence or absence of fields, is a tagged
//! variant here so that invalid combinations are unrepresentable.
//!
//! ## Core Models
//!
//! - `ChildRecord`: a registered child or pregnancy record
//! - `AgeEntry`: registered age (months) or gestation (weeks) at creation time
//! - `Sex` / `MeasurementType`: discriminants for percentile curves
//! - `PercentileAnchor` / `CurvePoint` / `GrowthPercentileDocument`: growth
//!   reference curve data

// Domain modules
mod child;
mod growth;

// Re-export all public types for convenience
pub use child::{AgeEntry, ChildRecord};
pub use growth::{
    CurvePoint, GrowthPercentileDocument, MeasurementType, PercentileAnchor, Sex,
};
