//! Concern categories and per-category counters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four concern-tagging axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConcernCategory {
    /// Team execution.
    E,
    /// Growth capability.
    G,
    /// Collaboration and culture.
    C,
    /// Leadership direction.
    L,
}

impl ConcernCategory {
    pub const ALL: [ConcernCategory; 4] = [
        ConcernCategory::E,
        ConcernCategory::G,
        ConcernCategory::C,
        ConcernCategory::L,
    ];

    /// Categories that compete for a primary slot behind L.
    pub const CANDIDATES: [ConcernCategory; 3] =
        [ConcernCategory::E, ConcernCategory::G, ConcernCategory::C];

    /// Position in the tie-break order G > C > E > L (lower wins).
    pub fn tie_break_rank(&self) -> u8 {
        match self {
            ConcernCategory::G => 0,
            ConcernCategory::C => 1,
            ConcernCategory::E => 2,
            ConcernCategory::L => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConcernCategory::E => "E",
            ConcernCategory::G => "G",
            ConcernCategory::C => "C",
            ConcernCategory::L => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConcernCategory::E => "Team Execution",
            ConcernCategory::G => "Growth Capability",
            ConcernCategory::C => "Collaboration & Culture",
            ConcernCategory::L => "Leadership Direction",
        }
    }
}

impl fmt::Display for ConcernCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConcernCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "E" | "e" => Ok(ConcernCategory::E),
            "G" | "g" => Ok(ConcernCategory::G),
            "C" | "c" => Ok(ConcernCategory::C),
            "L" | "l" => Ok(ConcernCategory::L),
            other => Err(ValidationError::invalid_format(
                "category",
                format!("unknown category '{}'", other),
            )),
        }
    }
}

/// A non-negative counter per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryCounts {
    #[serde(rename = "E")]
    pub e: u32,
    #[serde(rename = "G")]
    pub g: u32,
    #[serde(rename = "C")]
    pub c: u32,
    #[serde(rename = "L")]
    pub l: u32,
}

impl CategoryCounts {
    pub fn get(&self, category: ConcernCategory) -> u32 {
        match category {
            ConcernCategory::E => self.e,
            ConcernCategory::G => self.g,
            ConcernCategory::C => self.c,
            ConcernCategory::L => self.l,
        }
    }

    pub fn increment(&mut self, category: ConcernCategory) {
        match category {
            ConcernCategory::E => self.e += 1,
            ConcernCategory::G => self.g += 1,
            ConcernCategory::C => self.c += 1,
            ConcernCategory::L => self.l += 1,
        }
    }

    /// Returns true if the category has been counted at least once.
    pub fn has(&self, category: ConcernCategory) -> bool {
        self.get(category) > 0
    }

    pub fn total(&self) -> u32 {
        self.e + self.g + self.c + self.l
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_break_order_is_g_c_e_then_l() {
        let mut categories = ConcernCategory::ALL;
        categories.sort_by_key(|c| c.tie_break_rank());
        assert_eq!(
            categories,
            [ConcernCategory::G, ConcernCategory::C, ConcernCategory::E, ConcernCategory::L]
        );
    }

    #[test]
    fn counts_increment_per_category() {
        let mut counts = CategoryCounts::default();
        counts.increment(ConcernCategory::G);
        counts.increment(ConcernCategory::G);
        counts.increment(ConcernCategory::L);

        assert_eq!(counts.get(ConcernCategory::G), 2);
        assert!(counts.has(ConcernCategory::L));
        assert!(!counts.has(ConcernCategory::E));
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn counts_serialize_with_category_keys() {
        let counts = CategoryCounts { e: 5, g: 6, c: 4, l: 2 };
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json, serde_json::json!({"E": 5, "G": 6, "C": 4, "L": 2}));
    }

    #[test]
    fn category_parses_single_letters() {
        assert_eq!("c".parse::<ConcernCategory>().unwrap(), ConcernCategory::C);
        assert!("X".parse::<ConcernCategory>().is_err());
    }
}
