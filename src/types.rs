//! Input vocabulary for growth computations
//!
//! Hosts hand these enums over directly or parse them from form/API strings
//! via `FromStr`. Wire names follow the host convention: camelCase for
//! measurements (`headCircumference`), lowercase for gender and standard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

/// Anthropometric measurement type
///
/// `Bmi` exists in the vocabulary because hosts store it alongside the
/// others, but no reference tables ship for it; selecting it fails with
/// [`GrowthError::UnsupportedMeasurement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Measurement {
    Weight,
    Height,
    HeadCircumference,
    Bmi,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Measurement::Weight => "weight",
            Measurement::Height => "height",
            Measurement::HeadCircumference => "headCircumference",
            Measurement::Bmi => "bmi",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Measurement {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(Measurement::Weight),
            "height" | "length" => Ok(Measurement::Height),
            "headCircumference" | "head_circumference" => Ok(Measurement::HeadCircumference),
            "bmi" => Ok(Measurement::Bmi),
            other => Err(GrowthError::InvalidInput(format!(
                "unknown measurement '{other}': valid options are weight, height, headCircumference, bmi"
            ))),
        }
    }
}

/// Biological sex used to pick the reference distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(GrowthError::InvalidInput(format!(
                "unknown gender '{other}': valid options are male, female"
            ))),
        }
    }
}

/// Population growth standard backing the reference tables
///
/// Single variant today. Anything else a host sends must be rejected, not
/// approximated, so `FromStr` is the enforcement point for string input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStandard {
    #[default]
    Who,
}

impl fmt::Display for GrowthStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthStandard::Who => write!(f, "who"),
        }
    }
}

impl FromStr for GrowthStandard {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "who" => Ok(GrowthStandard::Who),
            other => Err(GrowthError::UnsupportedStandard(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_round_trips_through_display() {
        for m in [
            Measurement::Weight,
            Measurement::Height,
            Measurement::HeadCircumference,
            Measurement::Bmi,
        ] {
            assert_eq!(m.to_string().parse::<Measurement>().unwrap(), m);
        }
    }

    #[test]
    fn test_measurement_accepts_length_alias() {
        assert_eq!("length".parse::<Measurement>().unwrap(), Measurement::Height);
    }

    #[test]
    fn test_gender_parses_short_forms() {
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn test_unknown_standard_is_rejected() {
        let err = "japanese".parse::<GrowthStandard>().unwrap_err();
        assert_eq!(err, GrowthError::UnsupportedStandard("japanese".to_string()));
    }

    #[test]
    fn test_standard_defaults_to_who() {
        assert_eq!(GrowthStandard::default(), GrowthStandard::Who);
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&Measurement::HeadCircumference).unwrap(),
            "\"headCircumference\""
        );
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(serde_json::to_string(&GrowthStandard::Who).unwrap(), "\"who\"");
    }
}
