//! Rational approximations of the standard normal distribution
//!
//! Two classic approximations from Abramowitz & Stegun, *Handbook of
//! Mathematical Functions* (1964):
//!
//! * **26.2.17** — forward CDF, used to turn a Z-score into a percentile.
//!   Absolute error < 7.5e-8 over the approximation's validity range.
//! * **26.2.23** — inverse CDF, used only for reference-curve generation.
//!   Absolute error < 4.5e-4, adequate for the seven canonical chart
//!   percentiles but not re-validated for tails beyond them.
//!
//! The coefficients below are the published ones and are part of this
//! crate's output contract; do not "improve" them.

use crate::error::{GrowthError, Result};
use crate::zscore::round_to_places;

// A&S 26.2.17 polynomial weights
const T_SCALE: f64 = 0.2316419;
const B1: f64 = 0.319381530;
const B2: f64 = -0.356563782;
const B3: f64 = 1.781477937;
const B4: f64 = -1.821255978;
const B5: f64 = 1.330274429;

// A&S 26.2.23 rational coefficients
const C0: f64 = 2.515517;
const C1: f64 = 0.802853;
const C2: f64 = 0.010328;
const D1: f64 = 1.432788;
const D2: f64 = 0.189269;
const D3: f64 = 0.001308;

/// Beyond this |z| the CDF saturates to 0/1 within the approximation's
/// stated validity; short-circuit instead of evaluating the polynomial.
const Z_SATURATION: f64 = 8.0;

/// Convert a Z-score to a percentile in [0, 100], rounded to 1 decimal
///
/// Evaluates A&S 26.2.17 on `|z|` and reflects for negative `z` via
/// `CDF(z) = 1 - CDF(-z)`. Monotonically non-decreasing in `z`.
pub fn z_score_to_percentile(z: f64) -> f64 {
    if z > Z_SATURATION {
        return 100.0;
    }
    if z < -Z_SATURATION {
        return 0.0;
    }

    let x = z.abs();
    let t = 1.0 / (1.0 + T_SCALE * x);
    let pdf = (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
    let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let upper = 1.0 - pdf * poly;

    let cdf = if z >= 0.0 { upper } else { 1.0 - upper };
    round_to_places(cdf * 100.0, 1)
}

/// Convert a percentile strictly inside (0, 100) to a Z-score
///
/// A&S 26.2.23: evaluated on the lower tail and negated, so `p` and
/// `100 - p` give symmetric results. `p = 50` returns exactly `0.0`.
///
/// # Errors
///
/// [`GrowthError::InvalidPercentile`] for `p <= 0`, `p >= 100`, or NaN.
pub fn percentile_to_z_score(percentile: f64) -> Result<f64> {
    if percentile.is_nan() || percentile <= 0.0 || percentile >= 100.0 {
        return Err(GrowthError::InvalidPercentile(percentile));
    }
    if percentile == 50.0 {
        return Ok(0.0);
    }

    let p = percentile / 100.0;
    let (p_adj, lower_tail) = if p < 0.5 { (p, true) } else { (1.0 - p, false) };

    let t = (-2.0 * p_adj.ln()).sqrt();
    let z = t - (C0 + t * (C1 + t * C2)) / (1.0 + t * (D1 + t * (D2 + t * D3)));

    Ok(if lower_tail { -z } else { z })
}
