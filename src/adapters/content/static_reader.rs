//! Content reader over reference content held in memory.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::concern::{CombinationId, ConcernCatalog};
use crate::domain::content::{ReferenceContent, Solution};
use crate::domain::leadership::{LeadershipTypeCode, LeadershipTypeProfile};
use crate::domain::questionnaire::QuestionCatalog;
use crate::ports::{ContentError, ContentReader};

/// Serves content from an already-validated `ReferenceContent`.
///
/// Never fails; the content was checked when it was loaded.
#[derive(Debug, Clone)]
pub struct StaticContentReader {
    questions: Arc<QuestionCatalog>,
    concerns: Arc<ConcernCatalog>,
    leadership_types: Arc<HashMap<LeadershipTypeCode, LeadershipTypeProfile>>,
    solutions: Arc<HashMap<CombinationId, Solution>>,
}

impl StaticContentReader {
    pub fn new(content: ReferenceContent) -> Self {
        Self {
            questions: Arc::new(content.questions),
            concerns: Arc::new(content.concerns),
            leadership_types: Arc::new(content.leadership_types),
            solutions: Arc::new(content.solutions),
        }
    }

    /// Reader over the content embedded in the binary.
    pub fn embedded() -> Self {
        Self::new(ReferenceContent::embedded().clone())
    }
}

#[async_trait]
impl ContentReader for StaticContentReader {
    async fn question_catalog(&self) -> Result<Arc<QuestionCatalog>, ContentError> {
        Ok(Arc::clone(&self.questions))
    }

    async fn concern_catalog(&self) -> Result<Arc<ConcernCatalog>, ContentError> {
        Ok(Arc::clone(&self.concerns))
    }

    async fn leadership_type(
        &self,
        code: LeadershipTypeCode,
    ) -> Result<Option<LeadershipTypeProfile>, ContentError> {
        Ok(self.leadership_types.get(&code).cloned())
    }

    async fn solution(&self, combination: CombinationId) -> Result<Option<Solution>, ContentError> {
        Ok(self.solutions.get(&combination).cloned())
    }
}
