//! Questions and the question catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Dimension;
use crate::domain::foundation::{QuestionId, ValidationError};

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub dimension: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdimension: Option<String>,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>, dimension: Dimension) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            dimension,
            subdimension: None,
        }
    }

    pub fn with_subdimension(mut self, subdimension: impl Into<String>) -> Self {
        self.subdimension = Some(subdimension.into());
        self
    }
}

/// Immutable, validated set of questions keyed by id.
///
/// The catalog is the only source of truth for which dimension a question
/// belongs to; the classifier never trusts a dimension sent by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<QuestionId, Dimension>,
}

impl QuestionCatalog {
    /// Builds a catalog, rejecting duplicate question ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(questions.len());
        for question in &questions {
            if question.text.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "questions[{}].text",
                    question.id
                )));
            }
            if index.insert(question.id, question.dimension).is_some() {
                return Err(ValidationError::duplicate_id("question", question.id.to_string()));
            }
        }
        Ok(Self { questions, index })
    }

    /// Returns the dimension of a question, or `None` for unknown ids.
    pub fn dimension_of(&self, id: QuestionId) -> Option<Dimension> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.index.contains_key(&id)
    }

    /// Questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions belonging to one dimension, in catalog order.
    pub fn questions_in(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.dimension == dimension)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
