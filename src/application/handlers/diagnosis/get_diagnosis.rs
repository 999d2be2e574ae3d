//! GetDiagnosisHandler - Query handler for a recorded diagnosis.

use std::sync::Arc;

use crate::domain::foundation::{DiagnosisId, DomainError, ErrorCode};
use crate::ports::{ContentReader, DiagnosisRepository};

use super::results::{require_profile, require_solution, DiagnosisResult};

#[derive(Debug, Clone)]
pub struct GetDiagnosisQuery {
    pub id: DiagnosisId,
}

/// Fetches a stored record and the current content for its results.
pub struct GetDiagnosisHandler {
    content: Arc<dyn ContentReader>,
    repository: Arc<dyn DiagnosisRepository>,
}

impl GetDiagnosisHandler {
    pub fn new(content: Arc<dyn ContentReader>, repository: Arc<dyn DiagnosisRepository>) -> Self {
        Self { content, repository }
    }

    pub async fn handle(&self, query: GetDiagnosisQuery) -> Result<DiagnosisResult, DomainError> {
        let record = self.repository.find_by_id(&query.id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::DiagnosisNotFound, "Diagnosis not found")
                .with_detail("diagnosis_id", query.id.to_string())
        })?;

        let profile = require_profile(self.content.as_ref(), record.leadership_type).await?;
        let solution =
            require_solution(self.content.as_ref(), record.concern_analysis.combination_id).await?;

        Ok(DiagnosisResult {
            record,
            profile,
            solution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::StaticContentReader;
    use crate::adapters::diagnosis::InMemoryDiagnosisRepository;
    use crate::application::handlers::diagnosis::{SubmitDiagnosisCommand, SubmitDiagnosisHandler};
    use crate::application::handlers::diagnosis::test_support::{answers_by_dimension, ids};
    use crate::domain::concern::DEFAULT_MAX_SELECTED_CONCERNS;

    #[tokio::test]
    async fn returns_submitted_diagnosis() {
        let content: Arc<dyn ContentReader> = Arc::new(StaticContentReader::embedded());
        let repository: Arc<dyn DiagnosisRepository> = Arc::new(InMemoryDiagnosisRepository::new());
        let submitted = SubmitDiagnosisHandler::new(
            content.clone(),
            repository.clone(),
            DEFAULT_MAX_SELECTED_CONCERNS,
        )
        .handle(SubmitDiagnosisCommand {
            respondent_name: None,
            answers: answers_by_dimension(2, 2, 6),
            concern_ids: ids(&["k10"]),
        })
        .await
        .unwrap();

        let handler = GetDiagnosisHandler::new(content, repository);
        let found = handler
            .handle(GetDiagnosisQuery {
                id: submitted.record.id,
            })
            .await
            .unwrap();

        assert_eq!(found.record, submitted.record);
        assert_eq!(found.profile, submitted.profile);
        assert_eq!(found.solution, submitted.solution);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let handler = GetDiagnosisHandler::new(
            Arc::new(StaticContentReader::embedded()),
            Arc::new(InMemoryDiagnosisRepository::new()),
        );
        let id = DiagnosisId::new();

        let err = handler.handle(GetDiagnosisQuery { id }).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DiagnosisNotFound);
        assert!(err.is_not_found());
        assert_eq!(err.details.get("diagnosis_id"), Some(&id.to_string()));
    }
}
