// ABOUTME: Main library entry point for the Mumpa admin tooling
// ABOUTME: Provides logging setup, response formatters, and percentile seeding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

#![deny(unsafe_code)]

//! # Mumpa Admin Tooling
//!
//! Administrative utilities for the Mumpa growth backend: reference-data
//! seeding, manual calculation checks, and the response shapes the API
//! serves for child records.
//!
//! The computational core lives in the workspace crates and is re-exported
//! here for binaries and integration tests:
//!
//! - **`mumpa-core`**: errors, models, constants
//! - **`mumpa-intelligence`**: age projection and percentile curve building
//!
//! ## Binaries
//!
//! - `seed-growth-percentiles`: build the six growth reference curves and
//!   upsert them into the document store
//! - `check-age-projection`: project a hand-entered record against the
//!   current wall clock

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by binary crates (src/bin/) and integration tests
// (tests/). They must remain `pub` so external consumers can access them.

/// API response formatters for child records
pub mod formatters;

/// Logging configuration and structured logging setup
pub mod logging;

/// Growth percentile seeding against the document store
pub mod seeding;

// Re-exports from workspace crates for a single import surface
pub use mumpa_core::{constants, errors, models};
pub use mumpa_intelligence as intelligence;
