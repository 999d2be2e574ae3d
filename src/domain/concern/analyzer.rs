//! Concern Analyzer - picks primary concern categories and the matching
//! solution combination for a set of selected concerns.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{CategoryCounts, CombinationId, ConcernCatalog, ConcernCategory};
use crate::domain::foundation::ConcernId;

/// Tally of each category normalized by its catalog denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryZScores {
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "G")]
    pub g: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "L")]
    pub l: f64,
}

impl CategoryZScores {
    pub fn get(&self, category: ConcernCategory) -> f64 {
        match category {
            ConcernCategory::E => self.e,
            ConcernCategory::G => self.g,
            ConcernCategory::C => self.c,
            ConcernCategory::L => self.l,
        }
    }
}

/// Outcome of analyzing a concern selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConcernAnalysis {
    pub primary_a: Option<ConcernCategory>,
    pub primary_b: Option<ConcernCategory>,
    pub combination_id: CombinationId,
}

/// Stateless analyzer over a selection and a concern catalog.
pub struct ConcernAnalyzer;

impl ConcernAnalyzer {
    /// Counts every category of every selected concern.
    ///
    /// Cross-cutting concerns add one to each of their categories. Ids that are
    /// not in the catalog are skipped; repeated ids are counted each time.
    pub fn tally(selected: &[ConcernId], catalog: &ConcernCatalog) -> CategoryCounts {
        let mut tally = CategoryCounts::default();
        for concern in selected.iter().filter_map(|id| catalog.get(id)) {
            for category in &concern.categories {
                tally.increment(*category);
            }
        }
        tally
    }

    /// Normalizes a tally by the catalog's per-category denominators.
    pub fn z_scores(tally: &CategoryCounts, catalog: &ConcernCatalog) -> CategoryZScores {
        let denominators = catalog.denominators();
        let z = |category: ConcernCategory| match denominators.get(category) {
            0 => 0.0,
            denominator => f64::from(tally.get(category)) / f64::from(denominator),
        };

        CategoryZScores {
            e: z(ConcernCategory::E),
            g: z(ConcernCategory::G),
            c: z(ConcernCategory::C),
            l: z(ConcernCategory::L),
        }
    }

    /// Orders E, G and C by descending Z-score, ties broken by G > C > E.
    pub fn rank_candidates(z_scores: &CategoryZScores) -> [ConcernCategory; 3] {
        let mut ranked = ConcernCategory::CANDIDATES;
        ranked.sort_by(|a, b| compare_candidates(*a, *b, z_scores));
        ranked
    }

    /// Analyzes a selection of concern ids.
    ///
    /// Total: an empty selection, or one made only of unknown ids, yields no
    /// primaries and the `P08` fallback.
    pub fn analyze(selected: &[ConcernId], catalog: &ConcernCatalog) -> ConcernAnalysis {
        let tally = Self::tally(selected, catalog);
        let z_scores = Self::z_scores(&tally, catalog);
        let ranked = Self::rank_candidates(&z_scores);
        let qualifies = |category: ConcernCategory| z_scores.get(category) > 0.0;

        let (primary_a, primary_b) = if tally.has(ConcernCategory::L) {
            let top = ranked[0];
            (Some(ConcernCategory::L), qualifies(top).then_some(top))
        } else {
            // Positions are checked independently. ranked[1] can never outscore
            // ranked[0], so a lone primary_b is unreachable with non-negative scores.
            (
                qualifies(ranked[0]).then_some(ranked[0]),
                qualifies(ranked[1]).then_some(ranked[1]),
            )
        };

        ConcernAnalysis {
            primary_a,
            primary_b,
            combination_id: CombinationId::select(primary_a, primary_b, &tally),
        }
    }
}

fn compare_candidates(a: ConcernCategory, b: ConcernCategory, z_scores: &CategoryZScores) -> Ordering {
    z_scores
        .get(b)
        .total_cmp(&z_scores.get(a))
        .then_with(|| a.tie_break_rank().cmp(&b.tie_break_rank()))
}
