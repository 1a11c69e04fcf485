// ABOUTME: Core types and constants for the Mumpa growth platform
// ABOUTME: Foundation crate with error handling, child/growth models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

#![deny(unsafe_code)]

//! # Mumpa Core
//!
//! Foundation crate providing shared types and constants for the Mumpa growth
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Core data models (`ChildRecord`, `AgeEntry`, percentile curve types)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`ChildRecord`, `AgeEntry`, `Sex`, `MeasurementType`, curve types)
pub mod models;
