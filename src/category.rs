use num_derive::FromPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// BMI classification bucket, ordered by ascending BMI range. The
/// buckets cover the whole axis from (-inf, 16) up to [40, +inf)
/// with no gaps and no overlaps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "title_case")]
pub enum BmiCategory {
    SevereThinness = 0,
    ModerateThinness = 1,
    MildThinness = 2,
    Normal = 3,
    Overweight = 4,
    ObeseClassI = 5,
    ObeseClassII = 6,
    ObeseClassIII = 7,
}

impl TryFrom<u8> for BmiCategory {
    type Error = &'static str;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        num::FromPrimitive::from_u8(ordinal).ok_or("Invalid BMI category")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_round_trip() {
        let test_data = [
            (0, BmiCategory::SevereThinness),
            (1, BmiCategory::ModerateThinness),
            (2, BmiCategory::MildThinness),
            (3, BmiCategory::Normal),
            (4, BmiCategory::Overweight),
            (5, BmiCategory::ObeseClassI),
            (6, BmiCategory::ObeseClassII),
            (7, BmiCategory::ObeseClassIII),
        ];

        for (i, (ordinal, expected_category)) in test_data.into_iter().enumerate() {
            assert_eq!(
                BmiCategory::try_from(ordinal),
                Ok(expected_category),
                "Test case #{}",
                i
            );
            assert_eq!(expected_category as u8, ordinal, "Test case #{}", i);
        }
    }

    #[test]
    fn ordinal_out_of_range_is_rejected() {
        assert_eq!(BmiCategory::try_from(8), Err("Invalid BMI category"));
    }

    #[test]
    fn categories_are_ordered_by_ascending_bmi_range() {
        assert!(BmiCategory::SevereThinness < BmiCategory::ModerateThinness);
        assert!(BmiCategory::Normal < BmiCategory::Overweight);
        assert!(BmiCategory::ObeseClassII < BmiCategory::ObeseClassIII);
    }

    #[test]
    fn display_uses_title_case() {
        assert_eq!(BmiCategory::SevereThinness.to_string(), "Severe Thinness");
        assert_eq!(BmiCategory::Normal.to_string(), "Normal");
    }
}
