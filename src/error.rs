//! Error taxonomy for growth-percentile computations
//!
//! Every failure is raised synchronously at the point of violation and is
//! never retried or converted to a default value. The one documented
//! sentinel (a `0.0` curve value for an out-of-domain Box-Cox base) is a
//! defined output of the curve generator, not an error.

use crate::types::Measurement;
use thiserror::Error;

/// Errors for growth-percentile operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrowthError {
    #[error("Invalid measurement value {0}: value and reference M/S must be positive")]
    InvalidMeasurement(f64),

    #[error("Invalid age {0} months: age must be >= 0")]
    InvalidAge(f64),

    #[error("Unsupported growth standard '{0}': only 'who' is available")]
    UnsupportedStandard(String),

    #[error("Unsupported measurement '{0}': no reference tables for this measurement")]
    UnsupportedMeasurement(Measurement),

    #[error("Reference table has no records")]
    EmptyTable,

    #[error("Percentile {0} out of range: must be strictly between 0 and 100")]
    InvalidPercentile(f64),

    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, GrowthError>;
