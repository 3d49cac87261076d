//! Crecer - Deterministic LMS growth-percentile engine
//!
//! This library converts a child's raw anthropometric measurement (weight,
//! height/length, head circumference) into a standardized percentile and
//! Z-score against the WHO child growth standards, and generates the seven
//! canonical percentile curves for growth-chart rendering.
//!
//! Every function is pure and synchronous: reference tables are read-only
//! static data, outputs are freshly allocated, and nothing blocks or does
//! I/O, so the whole API is safe to call concurrently without locks.
//!
//! # Quick start
//!
//! ```
//! use crecer::{compute_growth_percentile, Gender, GrowthStandard, Measurement};
//!
//! let result = compute_growth_percentile(
//!     Measurement::Weight,
//!     3.3464, // kg
//!     0.0,    // age in months
//!     Gender::Male,
//!     GrowthStandard::Who,
//! )?;
//! assert_eq!(result.percentile, 50.0);
//! assert_eq!(result.z_score, 0.0);
//! # Ok::<(), crecer::GrowthError>(())
//! ```

pub mod curve;
pub mod dataset;
pub mod error;
pub mod lms;
pub mod normal;
pub mod percentile;
pub mod tables;
pub mod types;
pub mod zscore;

pub use curve::{generate_reference_curve, CurvePoint, ReferenceCurve, CANONICAL_PERCENTILES};
pub use dataset::select_dataset;
pub use error::{GrowthError, Result};
pub use lms::{lms_for_age, LmsRecord};
pub use normal::{percentile_to_z_score, z_score_to_percentile};
pub use percentile::{compute_growth_percentile, value_for_percentile, GrowthPercentileResult};
pub use types::{Gender, GrowthStandard, Measurement};
pub use zscore::{calculate_z_score, value_for_z, L_NEAR_ZERO, Z_SCORE_BOUND};
