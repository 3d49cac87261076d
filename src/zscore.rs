//! Box-Cox Z-score calculation
//!
//! The sole place where the LMS (Box-Cox) transform is applied. A measured
//! value is converted into a Z-score against interpolated LMS parameters:
//!
//! ```text
//! z = ((value / M)^L - 1) / (L * S)    for L != 0
//! z = ln(value / M) / S                for L -> 0
//! ```
//!
//! Z-scores are clamped to [-3.5, 3.5] per reference-standard convention:
//! extreme measurements read as "off the chart" rather than carrying an
//! unbounded Z. Output is rounded to 2 decimal places.

use crate::error::{GrowthError, Result};
use crate::lms::LmsRecord;

/// Below this magnitude L is treated as zero and the log-limit form of the
/// Box-Cox transform is used, avoiding division blowup near L = 0.
pub const L_NEAR_ZERO: f64 = 1e-10;

/// Clamp bound for reported Z-scores
pub const Z_SCORE_BOUND: f64 = 3.5;

/// Round half away from zero to `places` decimal places.
///
/// `f64::round` rounds halves away from zero, which is the rounding contract
/// for every numeric output of this crate.
pub(crate) fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Compute the clamped, rounded Z-score for a measured value
///
/// # Errors
///
/// [`GrowthError::InvalidMeasurement`] if `value <= 0`, `lms.m <= 0`, or
/// `lms.s <= 0`.
pub fn calculate_z_score(value: f64, lms: &LmsRecord) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 || lms.m <= 0.0 || lms.s <= 0.0 {
        return Err(GrowthError::InvalidMeasurement(value));
    }

    let ratio = value / lms.m;
    let raw = if lms.l.abs() < L_NEAR_ZERO {
        ratio.ln() / lms.s
    } else {
        (ratio.powf(lms.l) - 1.0) / (lms.l * lms.s)
    };

    let clamped = raw.clamp(-Z_SCORE_BOUND, Z_SCORE_BOUND);
    Ok(round_to_places(clamped, 2))
}

/// Invert the Box-Cox transform: the measurement value at a given Z
///
/// ```text
/// value = M * (1 + L * S * z)^(1/L)    for L != 0
/// value = M * exp(S * z)               for L -> 0
/// ```
///
/// When the base `1 + L*S*z` is non-positive the value is undefined for that
/// extreme percentile/age combination; the defined sentinel `0.0` is returned
/// so curve arrays keep equal length. Not rounded here; the curve layer owns
/// output precision.
pub fn value_for_z(z: f64, lms: &LmsRecord) -> f64 {
    if lms.l.abs() < L_NEAR_ZERO {
        return lms.m * (lms.s * z).exp();
    }
    let base = 1.0 + lms.l * lms.s * z;
    if base <= 0.0 {
        return 0.0;
    }
    lms.m * base.powf(1.0 / lms.l)
}
