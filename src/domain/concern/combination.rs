//! Solution combination codes selected by the concern analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CategoryCounts, ConcernCategory};
use crate::domain::foundation::ValidationError;

/// Key of a pre-authored solution.
///
/// - `P01`..`P06`: two-category pairs
/// - `P07`: L together with all of E, G and C
/// - `P08`..`P11`: a single category (`P08` doubles as the empty-selection fallback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CombinationId {
    P01,
    P02,
    P03,
    P04,
    P05,
    P06,
    P07,
    P08,
    P09,
    P10,
    P11,
}

impl CombinationId {
    pub const ALL: [CombinationId; 11] = [
        CombinationId::P01,
        CombinationId::P02,
        CombinationId::P03,
        CombinationId::P04,
        CombinationId::P05,
        CombinationId::P06,
        CombinationId::P07,
        CombinationId::P08,
        CombinationId::P09,
        CombinationId::P10,
        CombinationId::P11,
    ];

    /// Used when no category qualifies as primary.
    pub const FALLBACK: CombinationId = CombinationId::P08;

    /// Selects the combination for a pair of primaries and the raw tallies.
    pub fn select(
        primary_a: Option<ConcernCategory>,
        primary_b: Option<ConcernCategory>,
        tally: &CategoryCounts,
    ) -> Self {
        if primary_a == Some(ConcernCategory::L)
            && ConcernCategory::ALL.iter().all(|category| tally.has(*category))
        {
            return CombinationId::P07;
        }

        match (primary_a, primary_b) {
            (Some(a), Some(b)) => Self::for_pair(a, b),
            (Some(single), None) | (None, Some(single)) => Self::for_single(single),
            (None, None) => Self::FALLBACK,
        }
    }

    /// Dedicated code for a lone category.
    pub fn for_single(category: ConcernCategory) -> Self {
        match category {
            ConcernCategory::L => CombinationId::P08,
            ConcernCategory::E => CombinationId::P09,
            ConcernCategory::G => CombinationId::P10,
            ConcernCategory::C => CombinationId::P11,
        }
    }

    /// Code for an unordered pair of categories.
    ///
    /// A degenerate pair (same category twice) maps to that category's single code.
    pub fn for_pair(a: ConcernCategory, b: ConcernCategory) -> Self {
        use ConcernCategory::*;

        let (first, second) = if a.as_str() <= b.as_str() { (a, b) } else { (b, a) };
        match (first, second) {
            (E, L) => CombinationId::P01,
            (G, L) => CombinationId::P02,
            (C, L) => CombinationId::P03,
            (E, G) => CombinationId::P04,
            (C, E) => CombinationId::P05,
            (C, G) => CombinationId::P06,
            (same, _) => Self::for_single(same),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CombinationId::P01 => "P01",
            CombinationId::P02 => "P02",
            CombinationId::P03 => "P03",
            CombinationId::P04 => "P04",
            CombinationId::P05 => "P05",
            CombinationId::P06 => "P06",
            CombinationId::P07 => "P07",
            CombinationId::P08 => "P08",
            CombinationId::P09 => "P09",
            CombinationId::P10 => "P10",
            CombinationId::P11 => "P11",
        }
    }
}

impl fmt::Display for CombinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CombinationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("combination_id", format!("unknown code '{}'", s))
            })
    }
}
