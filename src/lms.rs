//! LMS reference records and age interpolation
//!
//! The LMS method (Cole, 1990) describes a skewed growth distribution with
//! three age-varying parameters: Box-Cox power (L), median (M), and
//! coefficient of variation (S). Reference tables carry these parameters at
//! irregularly-spaced calibration ages; this module recovers parameters for
//! any age in between by piecewise linear interpolation, clamping to the
//! first/last record outside the table's span.
//!
//! # References
//!
//! Cole, T. J. (1990). The LMS method for constructing normalized growth
//! standards. European Journal of Clinical Nutrition, 44(1), 45-60.

use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};

/// One calibration point of a reference distribution
///
/// Invariants (guaranteed by the bundled tables, required of host-supplied
/// ones): records within a table sorted by strictly increasing `age_months`,
/// `m > 0`, `s > 0`. `l` may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsRecord {
    /// Age in months (>= 0)
    pub age_months: f64,
    /// Box-Cox power
    pub l: f64,
    /// Median
    pub m: f64,
    /// Coefficient of variation
    pub s: f64,
}

/// Interpolate LMS parameters at an arbitrary age
///
/// * Ages at or below the table's first record clamp to the first record.
/// * Ages at or above the last record clamp to the last record.
/// * In between, finds the bracketing pair `(lower, upper)` with
///   `lower.age_months <= age < upper.age_months` and linearly interpolates
///   `l`, `m`, `s` independently. The returned record's `age_months` is the
///   requested age, not a snapped table age.
///
/// A single-record table returns that record for any age. The input slice is
/// never mutated.
///
/// # Errors
///
/// [`GrowthError::EmptyTable`] if `table` has no records (unreachable with
/// the bundled tables; defends against malformed host-supplied data), and
/// [`GrowthError::InvalidAge`] for a non-finite age.
pub fn lms_for_age(age_months: f64, table: &[LmsRecord]) -> Result<LmsRecord> {
    if !age_months.is_finite() {
        return Err(GrowthError::InvalidAge(age_months));
    }
    let first = table.first().ok_or(GrowthError::EmptyTable)?;
    let last = table.last().ok_or(GrowthError::EmptyTable)?;

    if age_months <= first.age_months {
        return Ok(*first);
    }
    if age_months >= last.age_months {
        return Ok(*last);
    }

    // Table has >= 2 records here; exactly one consecutive pair brackets the age.
    for pair in table.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if lower.age_months <= age_months && age_months < upper.age_months {
            let fraction = (age_months - lower.age_months) / (upper.age_months - lower.age_months);
            return Ok(LmsRecord {
                age_months,
                l: lower.l + fraction * (upper.l - lower.l),
                m: lower.m + fraction * (upper.m - lower.m),
                s: lower.s + fraction * (upper.s - lower.s),
            });
        }
    }

    // Sorted-table invariant guarantees a bracketing pair above.
    unreachable!("age {age_months} not bracketed by a sorted reference table")
}
