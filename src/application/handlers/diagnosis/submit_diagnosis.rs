//! SubmitDiagnosisHandler - Command handler for a complete self-assessment.

use std::sync::Arc;

use crate::domain::concern::ConcernSelection;
use crate::domain::diagnosis::DiagnosisRecord;
use crate::domain::foundation::{ConcernId, DiagnosisId, DomainError};
use crate::domain::questionnaire::AnswerSet;
use crate::ports::{ContentReader, DiagnosisRepository};

use super::results::{require_profile, require_solution, DiagnosisResult};

/// Command to score and record a diagnosis.
#[derive(Debug, Clone)]
pub struct SubmitDiagnosisCommand {
    pub respondent_name: Option<String>,
    pub answers: AnswerSet,
    /// Replayed as wizard toggles: an id listed twice ends up deselected.
    /// Ids missing from the concern catalog are dropped first.
    pub concern_ids: Vec<ConcernId>,
}

/// Handler that runs both engines and stores the outcome.
///
/// The record is only saved once content for both results has been found,
/// so a stored diagnosis can always be displayed.
pub struct SubmitDiagnosisHandler {
    content: Arc<dyn ContentReader>,
    repository: Arc<dyn DiagnosisRepository>,
    max_selected_concerns: usize,
}

impl SubmitDiagnosisHandler {
    pub fn new(
        content: Arc<dyn ContentReader>,
        repository: Arc<dyn DiagnosisRepository>,
        max_selected_concerns: usize,
    ) -> Self {
        Self {
            content,
            repository,
            max_selected_concerns,
        }
    }

    pub async fn handle(&self, cmd: SubmitDiagnosisCommand) -> Result<DiagnosisResult, DomainError> {
        let questions = self.content.question_catalog().await?;
        let concerns = self.content.concern_catalog().await?;

        let (known, stale): (Vec<_>, Vec<_>) = cmd
            .concern_ids
            .into_iter()
            .partition(|id| concerns.get(id).is_some());
        if !stale.is_empty() {
            tracing::debug!(ignored = stale.len(), "Dropped concern ids missing from catalog");
        }
        let selection = ConcernSelection::from_ids(known, self.max_selected_concerns)?;

        let record = DiagnosisRecord::evaluate(
            DiagnosisId::new(),
            cmd.respondent_name,
            cmd.answers,
            selection,
            &questions,
            &concerns,
        )?;

        let profile = require_profile(self.content.as_ref(), record.leadership_type).await?;
        let solution =
            require_solution(self.content.as_ref(), record.concern_analysis.combination_id).await?;

        self.repository.save(&record).await?;

        tracing::info!(
            diagnosis_id = %record.id,
            leadership_type = %record.leadership_type,
            combination = %record.concern_analysis.combination_id,
            "Diagnosis recorded"
        );

        Ok(DiagnosisResult {
            record,
            profile,
            solution,
        })
    }
}
