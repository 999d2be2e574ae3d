//! Leadership Classifier - maps questionnaire answers to a leadership type.
//!
//! Each dimension average is binarized against [`HIGH_THRESHOLD`] and the
//! three resulting levels select one of the eight types.

use serde::{Deserialize, Serialize};

use super::LeadershipTypeCode;
use crate::domain::questionnaire::{AnswerSet, Dimension, QuestionCatalog};

/// A dimension average at or above this value counts as high.
pub const HIGH_THRESHOLD: f64 = 4.5;

/// Per-dimension arithmetic means, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub growth: f64,
    pub sharing: f64,
    pub interaction: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Growth => self.growth,
            Dimension::Sharing => self.sharing,
            Dimension::Interaction => self.interaction,
        }
    }

    /// Binarizes every dimension against [`HIGH_THRESHOLD`].
    pub fn levels(&self) -> DimensionLevels {
        DimensionLevels {
            growth_high: is_high(self.growth),
            sharing_high: is_high(self.sharing),
            interaction_high: is_high(self.interaction),
        }
    }
}

/// High/low outcome per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionLevels {
    pub growth_high: bool,
    pub sharing_high: bool,
    pub interaction_high: bool,
}

impl DimensionLevels {
    pub fn leadership_type(&self) -> LeadershipTypeCode {
        LeadershipTypeCode::from_levels(self.sharing_high, self.interaction_high, self.growth_high)
    }
}

/// Stateless classifier over an answer set and a question catalog.
pub struct LeadershipClassifier;

impl LeadershipClassifier {
    /// Computes the rounded mean score of every dimension.
    ///
    /// # Edge Cases
    /// - Answers for ids missing from the catalog are ignored
    /// - A dimension with no answers averages to 0.0, which classifies as low
    pub fn dimension_scores(answers: &AnswerSet, catalog: &QuestionCatalog) -> DimensionScores {
        let mut sums = [0u32; 3];
        let mut counts = [0u32; 3];

        for (question, score) in answers.iter() {
            let Some(dimension) = catalog.dimension_of(question) else {
                continue;
            };
            let slot = slot(dimension);
            sums[slot] += u32::from(score.value());
            counts[slot] += 1;
        }

        let mean = |dimension: Dimension| {
            let slot = slot(dimension);
            if counts[slot] == 0 {
                0.0
            } else {
                round2(f64::from(sums[slot]) / f64::from(counts[slot]))
            }
        };

        DimensionScores {
            growth: mean(Dimension::Growth),
            sharing: mean(Dimension::Sharing),
            interaction: mean(Dimension::Interaction),
        }
    }

    /// Classifies an answer set into a leadership type.
    ///
    /// Total over every answer set, including the empty one (which yields `L08`).
    pub fn classify(answers: &AnswerSet, catalog: &QuestionCatalog) -> LeadershipTypeCode {
        Self::dimension_scores(answers, catalog).levels().leadership_type()
    }
}

fn is_high(mean: f64) -> bool {
    mean >= HIGH_THRESHOLD
}

fn slot(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Growth => 0,
        Dimension::Sharing => 1,
        Dimension::Interaction => 2,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
