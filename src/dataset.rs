//! Reference-table selection
//!
//! Maps (measurement, gender, standard) to one continuous age-ordered LMS
//! table. Weight and height concatenate the 0-60-month table with the
//! 5-18-year table; the concatenated tables are built once at first use and
//! shared as `&'static` slices, so repeated selection is allocation-free and
//! the same inputs always yield the same slice.

use std::sync::LazyLock;

use crate::error::{GrowthError, Result};
use crate::lms::LmsRecord;
use crate::tables;
use crate::types::{Gender, GrowthStandard, Measurement};

fn concat(parts: &[&[LmsRecord]]) -> Vec<LmsRecord> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

static WEIGHT_BOYS: LazyLock<Vec<LmsRecord>> =
    LazyLock::new(|| concat(&[tables::WEIGHT_BOYS_0_60, tables::WEIGHT_BOYS_61_216]));

static WEIGHT_GIRLS: LazyLock<Vec<LmsRecord>> =
    LazyLock::new(|| concat(&[tables::WEIGHT_GIRLS_0_60, tables::WEIGHT_GIRLS_61_216]));

static HEIGHT_BOYS: LazyLock<Vec<LmsRecord>> =
    LazyLock::new(|| concat(&[tables::HEIGHT_BOYS_0_60, tables::HEIGHT_BOYS_61_216]));

static HEIGHT_GIRLS: LazyLock<Vec<LmsRecord>> =
    LazyLock::new(|| concat(&[tables::HEIGHT_GIRLS_0_60, tables::HEIGHT_GIRLS_61_216]));

/// Select the reference table for a measurement/gender/standard combination
///
/// * Weight and height span 0-216 months (the 60/61-month discontinuity
///   between the two source studies is preserved, not smoothed).
/// * Head circumference spans 0-60 months; the reference standard has no
///   older-child data for it.
///
/// # Errors
///
/// [`GrowthError::UnsupportedStandard`] for any standard other than WHO and
/// [`GrowthError::UnsupportedMeasurement`] for BMI, which has no bundled
/// tables.
pub fn select_dataset(
    measurement: Measurement,
    gender: Gender,
    standard: GrowthStandard,
) -> Result<&'static [LmsRecord]> {
    // Single supported standard today; adding a second forces a decision here.
    match standard {
        GrowthStandard::Who => {}
    }

    let table: &'static [LmsRecord] = match (measurement, gender) {
        (Measurement::Weight, Gender::Male) => WEIGHT_BOYS.as_slice(),
        (Measurement::Weight, Gender::Female) => WEIGHT_GIRLS.as_slice(),
        (Measurement::Height, Gender::Male) => HEIGHT_BOYS.as_slice(),
        (Measurement::Height, Gender::Female) => HEIGHT_GIRLS.as_slice(),
        (Measurement::HeadCircumference, Gender::Male) => tables::HEAD_CIRCUMFERENCE_BOYS_0_60,
        (Measurement::HeadCircumference, Gender::Female) => tables::HEAD_CIRCUMFERENCE_GIRLS_0_60,
        (Measurement::Bmi, _) => {
            return Err(GrowthError::UnsupportedMeasurement(Measurement::Bmi));
        }
    };
    Ok(table)
}
