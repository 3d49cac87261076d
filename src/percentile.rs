//! Single-measurement percentile computation
//!
//! The externally-facing pipeline for one data point: select the reference
//! table, interpolate LMS parameters at the child's age, Box-Cox the
//! measured value into a Z-score, and convert to a percentile through the
//! normal CDF. Pure and allocation-light; safe to call concurrently.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::select_dataset;
use crate::error::{GrowthError, Result};
use crate::lms::lms_for_age;
use crate::normal::{percentile_to_z_score, z_score_to_percentile};
use crate::types::{Gender, GrowthStandard, Measurement};
use crate::zscore::{calculate_z_score, round_to_places, value_for_z};

/// Outcome of a single growth-percentile computation
///
/// Echoes every input alongside the computed percentile (1 decimal place)
/// and Z-score (2 decimal places, clamped to [-3.5, 3.5]). A plain value
/// object: no identity, nothing persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPercentileResult {
    pub measurement: Measurement,
    pub value: f64,
    pub percentile: f64,
    pub z_score: f64,
    pub age_in_months: f64,
    pub gender: Gender,
    pub standard: GrowthStandard,
}

/// Compute percentile and Z-score for one measured value
///
/// # Errors
///
/// * [`GrowthError::InvalidMeasurement`] - `value <= 0`
/// * [`GrowthError::InvalidAge`] - `age_months < 0`
/// * [`GrowthError::UnsupportedMeasurement`] - BMI requested
/// * [`GrowthError::UnsupportedStandard`] - non-WHO standard (string input)
pub fn compute_growth_percentile(
    measurement: Measurement,
    value: f64,
    age_months: f64,
    gender: Gender,
    standard: GrowthStandard,
) -> Result<GrowthPercentileResult> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GrowthError::InvalidMeasurement(value));
    }
    if !age_months.is_finite() || age_months < 0.0 {
        return Err(GrowthError::InvalidAge(age_months));
    }

    let table = select_dataset(measurement, gender, standard)?;
    let lms = lms_for_age(age_months, table)?;
    let z_score = calculate_z_score(value, &lms)?;
    let percentile = z_score_to_percentile(z_score);

    debug!(
        %measurement,
        %gender,
        value,
        age_months,
        l = lms.l,
        m = lms.m,
        s = lms.s,
        z_score,
        percentile,
        "computed growth percentile"
    );

    Ok(GrowthPercentileResult {
        measurement,
        value,
        percentile,
        z_score,
        age_in_months: age_months,
        gender,
        standard,
    })
}

/// Expected measurement value at a given percentile and age
///
/// The inverse of [`compute_growth_percentile`] for a single point: maps the
/// percentile to a Z-score (inverse normal CDF), then through the inverse
/// Box-Cox transform at the age-interpolated LMS parameters. Rounded to 2
/// decimals. Hosts use this to label chart bands and answer "what weight is
/// the 97th percentile at 10 months?".
///
/// # Errors
///
/// [`GrowthError::InvalidPercentile`] outside (0, 100), [`GrowthError::InvalidAge`]
/// for negative age, plus the dataset-selection failures of
/// [`select_dataset`].
pub fn value_for_percentile(
    measurement: Measurement,
    percentile: f64,
    age_months: f64,
    gender: Gender,
    standard: GrowthStandard,
) -> Result<f64> {
    if !age_months.is_finite() || age_months < 0.0 {
        return Err(GrowthError::InvalidAge(age_months));
    }

    let table = select_dataset(measurement, gender, standard)?;
    let lms = lms_for_age(age_months, table)?;
    let z = percentile_to_z_score(percentile)?;
    Ok(round_to_places(value_for_z(z, &lms), 2))
}
