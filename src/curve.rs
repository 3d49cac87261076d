//! Reference percentile curve generation
//!
//! Builds the seven canonical percentile trajectories (3rd through 97th)
//! across an age range, one point per integer month, for growth-chart
//! rendering. The inverse normal CDF is evaluated once per percentile per
//! call, not once per age point; each age point then runs the inverse
//! Box-Cox transform on interpolated LMS parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::select_dataset;
use crate::error::Result;
use crate::lms::lms_for_age;
use crate::normal::percentile_to_z_score;
use crate::types::{Gender, GrowthStandard, Measurement};
use crate::zscore::{round_to_places, value_for_z};

/// The seven percentile ranks drawn on growth charts
pub const CANONICAL_PERCENTILES: [u8; 7] = [3, 10, 25, 50, 75, 90, 97];

/// One age tick on a percentile curve
///
/// `value` is rounded to 2 decimals. A value of `0.0` is the defined
/// sentinel for an age/percentile combination outside the Box-Cox domain;
/// curves keep equal length instead of dropping points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub age_months: u32,
    pub value: f64,
}

/// Seven canonical percentile trajectories over a shared age axis
///
/// Freshly allocated on every generation call; nothing aliases the static
/// reference tables. All seven point vectors have identical length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCurve {
    curves: BTreeMap<u8, Vec<CurvePoint>>,
}

impl ReferenceCurve {
    /// Points for one canonical percentile rank, in age order
    pub fn points(&self, percentile: u8) -> Option<&[CurvePoint]> {
        self.curves.get(&percentile).map(Vec::as_slice)
    }

    /// Iterate curves in ascending percentile order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[CurvePoint])> {
        self.curves.iter().map(|(p, pts)| (*p, pts.as_slice()))
    }

    /// Number of percentile curves (seven when generated by this crate)
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// Generate the seven canonical percentile curves for charting
///
/// Ages run from the reference table's first record to
/// `min(max_age_months, table's last record age)`, inclusive, one point per
/// integer month.
///
/// # Errors
///
/// The dataset-selection failures of [`select_dataset`]; BMI has no curves.
pub fn generate_reference_curve(
    measurement: Measurement,
    gender: Gender,
    standard: GrowthStandard,
    max_age_months: u32,
) -> Result<ReferenceCurve> {
    let table = select_dataset(measurement, gender, standard)?;

    // Bundled tables start and end on whole months.
    let min_age = table[0].age_months.ceil() as u32;
    let table_max = table[table.len() - 1].age_months.floor() as u32;
    let effective_max = max_age_months.min(table_max);

    let z_by_rank: Vec<(u8, f64)> = CANONICAL_PERCENTILES
        .iter()
        .map(|&p| percentile_to_z_score(f64::from(p)).map(|z| (p, z)))
        .collect::<Result<_>>()?;

    let tick_count = if effective_max < min_age {
        0
    } else {
        (effective_max - min_age + 1) as usize
    };
    let mut curves: BTreeMap<u8, Vec<CurvePoint>> = CANONICAL_PERCENTILES
        .iter()
        .map(|&p| (p, Vec::with_capacity(tick_count)))
        .collect();

    for age in min_age..=effective_max {
        let lms = lms_for_age(f64::from(age), table)?;
        for &(rank, z) in &z_by_rank {
            let value = round_to_places(value_for_z(z, &lms), 2);
            // curves holds every canonical rank by construction
            if let Some(points) = curves.get_mut(&rank) {
                points.push(CurvePoint {
                    age_months: age,
                    value,
                });
            }
        }
    }

    debug!(
        %measurement,
        %gender,
        min_age,
        effective_max,
        ticks = tick_count,
        "generated reference curve"
    );

    debug_assert!(curves.values().all(|pts| pts.len() == tick_count));
    Ok(ReferenceCurve { curves })
}
