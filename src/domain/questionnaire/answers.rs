//! Sparse answer set produced by the questionnaire wizard.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{LikertScore, QuestionId, ValidationError};

/// Mapping from question id to Likert score. Only answered questions are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, LikertScore>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an answer set from raw `(question, score)` pairs, validating scores.
    ///
    /// A later pair for the same question overwrites an earlier one.
    pub fn from_raw<I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (u32, u8)>,
    {
        let mut answers = Self::new();
        for (question, score) in pairs {
            let score = LikertScore::try_new(score).map_err(|_| {
                ValidationError::out_of_range(
                    format!("answers[{}]", question),
                    LikertScore::MIN as i32,
                    LikertScore::MAX as i32,
                    score as i32,
                )
            })?;
            answers.record(QuestionId::new(question), score);
        }
        Ok(answers)
    }

    /// Records (or replaces) the answer for a question.
    pub fn record(&mut self, question: QuestionId, score: LikertScore) -> Option<LikertScore> {
        self.0.insert(question, score)
    }

    pub fn get(&self, question: QuestionId) -> Option<LikertScore> {
        self.0.get(&question).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, LikertScore)> + '_ {
        self.0.iter().map(|(id, score)| (*id, *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(QuestionId, LikertScore)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, LikertScore)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
