#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::category::BmiCategory;

const IMPERIAL_FACTOR: f64 = 703.0;
const MINIMUM_INDICATOR_AGE: u8 = 19;

/// Unit system used to interpret weight and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitsType {
    /// Kilograms and meters.
    #[default]
    Si,
    /// Pounds and inches.
    Imperial,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("The minimum age possible for BMI indicator is 19 years.")]
    AgeBelowMinimum,
}

/// BMI ratio calculator. It can use either SI or imperial units.
///
/// Fields are plain values and stay mutable after construction; no
/// range validation is applied, so degenerate inputs (zero or
/// negative weight and height) simply propagate through the
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BmiCalculator {
    /// Weight in kilograms (SI) or pounds (imperial).
    pub weight: f64,
    /// Height in meters (SI) or inches (imperial).
    pub height: f64,
    pub age: u8,
    pub units_type: UnitsType,
}

impl BmiCalculator {
    /// Calculator with units type set to SI.
    pub fn new(weight: f64, height: f64, age: u8) -> Self {
        Self {
            weight,
            height,
            age,
            units_type: UnitsType::Si,
        }
    }

    /// Calculator with a specific units type, applied to all
    /// parameters.
    pub fn with_units(weight: f64, height: f64, age: u8, units_type: UnitsType) -> Self {
        Self {
            weight,
            height,
            age,
            units_type,
        }
    }

    /// BMI ratio for the current weight and height, rounded to two
    /// decimal places. Zero height yields infinity or NaN and is not
    /// trapped.
    pub fn calculate(&self) -> f64 {
        let ratio = self.weight / self.height.powi(2);
        match self.units_type {
            UnitsType::Si => round2(ratio),
            UnitsType::Imperial => round2(ratio * IMPERIAL_FACTOR),
        }
    }

    /// Classification bucket for a BMI ratio. Total over all inputs.
    /// NaN fails every threshold comparison and lands in the last
    /// bucket.
    pub fn categorize(bmi_ratio: f64) -> BmiCategory {
        if bmi_ratio < 16.0 {
            BmiCategory::SevereThinness
        } else if bmi_ratio < 17.0 {
            BmiCategory::ModerateThinness
        } else if bmi_ratio < 18.5 {
            BmiCategory::MildThinness
        } else if bmi_ratio < 25.0 {
            BmiCategory::Normal
        } else if bmi_ratio < 30.0 {
            BmiCategory::Overweight
        } else if bmi_ratio < 35.0 {
            BmiCategory::ObeseClassI
        } else if bmi_ratio < 40.0 {
            BmiCategory::ObeseClassII
        } else {
            BmiCategory::ObeseClassIII
        }
    }

    /// Whether the BMI ratio falls within the healthy reference
    /// window for the given age, both ends inclusive. Ages below 19
    /// have no reference window and fail the precondition.
    pub fn is_ratio_correct(age: u8, bmi_ratio: f64) -> Result<bool, Error> {
        let (low, high) = match age {
            0..=18 => return Err(Error::AgeBelowMinimum),
            19..=24 => (19.0, 24.0),
            25..=34 => (20.0, 25.0),
            35..=44 => (21.0, 26.0),
            45..=54 => (22.0, 27.0),
            55..=64 => (23.0, 28.0),
            _ => (24.0, 29.0),
        };
        Ok((low..=high).contains(&bmi_ratio))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
