//! Shared fixtures and mock ports for handler tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::concern::{CombinationId, ConcernCatalog};
use crate::domain::content::{ReferenceContent, Solution};
use crate::domain::diagnosis::DiagnosisRecord;
use crate::domain::foundation::{ConcernId, DiagnosisId};
use crate::domain::leadership::{LeadershipTypeCode, LeadershipTypeProfile};
use crate::domain::questionnaire::{AnswerSet, Dimension, QuestionCatalog};
use crate::ports::{ContentError, ContentReader, DiagnosisRepository, DiagnosisRepositoryError};

/// Answers every embedded question with one score per dimension.
pub fn answers_by_dimension(growth: u8, sharing: u8, interaction: u8) -> AnswerSet {
    let catalog = &ReferenceContent::embedded().questions;
    AnswerSet::from_raw(catalog.questions().iter().map(|q| {
        let score = match q.dimension {
            Dimension::Growth => growth,
            Dimension::Sharing => sharing,
            Dimension::Interaction => interaction,
        };
        (q.id.value(), score)
    }))
    .unwrap()
}

pub fn ids(raw: &[&str]) -> Vec<ConcernId> {
    raw.iter().map(|id| ConcernId::new(*id).unwrap()).collect()
}

/// Content reader whose backing store is down.
pub struct UnavailableContentReader;

#[async_trait]
impl ContentReader for UnavailableContentReader {
    async fn question_catalog(&self) -> Result<Arc<QuestionCatalog>, ContentError> {
        Err(ContentError::Unavailable("Simulated outage".to_string()))
    }

    async fn concern_catalog(&self) -> Result<Arc<ConcernCatalog>, ContentError> {
        Err(ContentError::Unavailable("Simulated outage".to_string()))
    }

    async fn leadership_type(
        &self,
        _code: LeadershipTypeCode,
    ) -> Result<Option<LeadershipTypeProfile>, ContentError> {
        Err(ContentError::Unavailable("Simulated outage".to_string()))
    }

    async fn solution(&self, _combination: CombinationId) -> Result<Option<Solution>, ContentError> {
        Err(ContentError::Unavailable("Simulated outage".to_string()))
    }
}

/// Content reader with real catalogs but no result content.
pub struct EmptyResultContentReader {
    questions: Arc<QuestionCatalog>,
    concerns: Arc<ConcernCatalog>,
}

impl EmptyResultContentReader {
    pub fn new() -> Self {
        let content = ReferenceContent::embedded();
        Self {
            questions: Arc::new(content.questions.clone()),
            concerns: Arc::new(content.concerns.clone()),
        }
    }
}

#[async_trait]
impl ContentReader for EmptyResultContentReader {
    async fn question_catalog(&self) -> Result<Arc<QuestionCatalog>, ContentError> {
        Ok(self.questions.clone())
    }

    async fn concern_catalog(&self) -> Result<Arc<ConcernCatalog>, ContentError> {
        Ok(self.concerns.clone())
    }

    async fn leadership_type(
        &self,
        _code: LeadershipTypeCode,
    ) -> Result<Option<LeadershipTypeProfile>, ContentError> {
        Ok(None)
    }

    async fn solution(&self, _combination: CombinationId) -> Result<Option<Solution>, ContentError> {
        Ok(None)
    }
}

/// Repository that fails every call.
pub struct FailingDiagnosisRepository;

#[async_trait]
impl DiagnosisRepository for FailingDiagnosisRepository {
    async fn save(&self, _record: &DiagnosisRecord) -> Result<(), DiagnosisRepositoryError> {
        Err(DiagnosisRepositoryError::Storage("Simulated write failure".to_string()))
    }

    async fn find_by_id(
        &self,
        _id: &DiagnosisId,
    ) -> Result<Option<DiagnosisRecord>, DiagnosisRepositoryError> {
        Err(DiagnosisRepositoryError::Storage("Simulated read failure".to_string()))
    }

    async fn count(&self) -> Result<u64, DiagnosisRepositoryError> {
        Err(DiagnosisRepositoryError::Storage("Simulated read failure".to_string()))
    }
}
