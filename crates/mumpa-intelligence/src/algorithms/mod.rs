// ABOUTME: Algorithm modules for growth intelligence
// ABOUTME: Contains age projection and percentile curve generation

/// Temporal projection of registered age/gestation values
pub mod age_projection;

/// Percentile reference curve generation from calibration anchors
pub mod growth_percentiles;

pub use age_projection::{
    project, project_born, project_unborn, BornProjection, ProjectedAge, UnbornProjection,
};
pub use growth_percentiles::{build_percentile_curve, calibration_anchors};
