//! Leadership type codes produced by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the eight leadership types.
///
/// Each type corresponds to exactly one combination of high/low levels on the
/// sharing, interaction and growth dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeadershipTypeCode {
    L01,
    L02,
    L03,
    L04,
    L05,
    L06,
    L07,
    L08,
}

impl LeadershipTypeCode {
    pub const ALL: [LeadershipTypeCode; 8] = [
        LeadershipTypeCode::L01,
        LeadershipTypeCode::L02,
        LeadershipTypeCode::L03,
        LeadershipTypeCode::L04,
        LeadershipTypeCode::L05,
        LeadershipTypeCode::L06,
        LeadershipTypeCode::L07,
        LeadershipTypeCode::L08,
    ];

    /// Maps the three dimension levels to a type.
    pub fn from_levels(sharing_high: bool, interaction_high: bool, growth_high: bool) -> Self {
        match (sharing_high, interaction_high, growth_high) {
            (true, false, true) => LeadershipTypeCode::L01,
            (true, true, true) => LeadershipTypeCode::L02,
            (true, false, false) => LeadershipTypeCode::L03,
            (true, true, false) => LeadershipTypeCode::L04,
            (false, false, true) => LeadershipTypeCode::L05,
            (false, true, false) => LeadershipTypeCode::L06,
            (false, true, true) => LeadershipTypeCode::L07,
            (false, false, false) => LeadershipTypeCode::L08,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadershipTypeCode::L01 => "L01",
            LeadershipTypeCode::L02 => "L02",
            LeadershipTypeCode::L03 => "L03",
            LeadershipTypeCode::L04 => "L04",
            LeadershipTypeCode::L05 => "L05",
            LeadershipTypeCode::L06 => "L06",
            LeadershipTypeCode::L07 => "L07",
            LeadershipTypeCode::L08 => "L08",
        }
    }
}

impl fmt::Display for LeadershipTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadershipTypeCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("leadership_type", format!("unknown code '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_level_combination_maps_to_a_distinct_code() {
        let mut seen = HashSet::new();
        for sharing in [true, false] {
            for interaction in [true, false] {
                for growth in [true, false] {
                    seen.insert(LeadershipTypeCode::from_levels(sharing, interaction, growth));
                }
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn level_table_matches_reference() {
        use LeadershipTypeCode::*;
        assert_eq!(LeadershipTypeCode::from_levels(true, false, true), L01);
        assert_eq!(LeadershipTypeCode::from_levels(true, true, true), L02);
        assert_eq!(LeadershipTypeCode::from_levels(true, false, false), L03);
        assert_eq!(LeadershipTypeCode::from_levels(true, true, false), L04);
        assert_eq!(LeadershipTypeCode::from_levels(false, false, true), L05);
        assert_eq!(LeadershipTypeCode::from_levels(false, true, false), L06);
        assert_eq!(LeadershipTypeCode::from_levels(false, true, true), L07);
        assert_eq!(LeadershipTypeCode::from_levels(false, false, false), L08);
    }

    #[test]
    fn code_parses_and_displays() {
        assert_eq!("l04".parse::<LeadershipTypeCode>().unwrap(), LeadershipTypeCode::L04);
        assert_eq!(LeadershipTypeCode::L07.to_string(), "L07");
        assert!("L09".parse::<LeadershipTypeCode>().is_err());
    }

    #[test]
    fn code_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&LeadershipTypeCode::L02).unwrap(), "\"L02\"");
    }
}
