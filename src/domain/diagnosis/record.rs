//! Diagnosis record - one completed self-assessment.
//!
//! A record captures the inputs (answers and selected concerns) together with
//! every derived result, so a stored diagnosis can be shown again without
//! recomputing against content that may have changed since.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::concern::{ConcernAnalysis, ConcernAnalyzer, ConcernCatalog, ConcernSelection};
use crate::domain::foundation::{ConcernId, DiagnosisId, ValidationError};
use crate::domain::leadership::{DimensionScores, LeadershipClassifier, LeadershipTypeCode};
use crate::domain::questionnaire::{AnswerSet, QuestionCatalog};

/// Longest respondent name accepted, in characters.
pub const MAX_RESPONDENT_NAME_LEN: usize = 50;

/// A completed diagnosis.
///
/// # Invariants
///
/// - `leadership_type` is the classification of `dimension_scores`
/// - `concern_analysis` is the analysis of `selected_concerns`
/// - `respondent_name`, when present, is trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub id: DiagnosisId,

    /// Optional display name entered on the intro screen.
    pub respondent_name: Option<String>,

    pub answers: AnswerSet,
    pub dimension_scores: DimensionScores,
    pub leadership_type: LeadershipTypeCode,

    /// Concern ids in selection order.
    pub selected_concerns: Vec<ConcernId>,
    pub concern_analysis: ConcernAnalysis,

    pub created_at: DateTime<Utc>,
}

impl DiagnosisRecord {
    /// Scores answers and concerns against the given catalogs.
    pub fn evaluate(
        id: DiagnosisId,
        respondent_name: Option<String>,
        answers: AnswerSet,
        selection: ConcernSelection,
        questions: &QuestionCatalog,
        concerns: &ConcernCatalog,
    ) -> Result<Self, ValidationError> {
        let respondent_name = normalize_name(respondent_name)?;
        let dimension_scores = LeadershipClassifier::dimension_scores(&answers, questions);
        let leadership_type = dimension_scores.levels().leadership_type();
        let selected_concerns = selection.ids().to_vec();
        let concern_analysis = ConcernAnalyzer::analyze(&selected_concerns, concerns);

        Ok(Self {
            id,
            respondent_name,
            answers,
            dimension_scores,
            leadership_type,
            selected_concerns,
            concern_analysis,
            created_at: Utc::now(),
        })
    }
}

fn normalize_name(name: Option<String>) -> Result<Option<String>, ValidationError> {
    let Some(name) = name else {
        return Ok(None);
    };
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let len = trimmed.chars().count();
    if len > MAX_RESPONDENT_NAME_LEN {
        return Err(ValidationError::out_of_range(
            "respondent_name",
            0,
            MAX_RESPONDENT_NAME_LEN as i32,
            len as i32,
        ));
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::concern::test_support::reference_shaped_catalog;
    use crate::domain::concern::{CombinationId, ConcernCategory, DEFAULT_MAX_SELECTED_CONCERNS};
    use crate::domain::questionnaire::{Dimension, Question};

    fn questions() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Question::new(1, "g", Dimension::Growth),
            Question::new(2, "s", Dimension::Sharing),
            Question::new(3, "i", Dimension::Interaction),
        ])
        .unwrap()
    }

    fn selection(ids: &[&str]) -> ConcernSelection {
        ConcernSelection::from_ids(
            ids.iter().map(|id| ConcernId::new(*id).unwrap()),
            DEFAULT_MAX_SELECTED_CONCERNS,
        )
        .unwrap()
    }

    #[test]
    fn evaluate_derives_type_and_combination() {
        let answers = AnswerSet::from_raw([(1, 6), (2, 5), (3, 2)]).unwrap();
        let record = DiagnosisRecord::evaluate(
            DiagnosisId::new(),
            Some("  Kim  ".to_string()),
            answers,
            selection(&["G1", "L1"]),
            &questions(),
            &reference_shaped_catalog(),
        )
        .unwrap();

        assert_eq!(record.respondent_name.as_deref(), Some("Kim"));
        assert_eq!(record.dimension_scores.growth, 6.0);
        assert_eq!(record.leadership_type, LeadershipTypeCode::L01);
        assert_eq!(record.concern_analysis.primary_a, Some(ConcernCategory::L));
        assert_eq!(record.concern_analysis.primary_b, Some(ConcernCategory::G));
        assert_eq!(record.concern_analysis.combination_id, CombinationId::P02);
        assert_eq!(record.selected_concerns.len(), 2);
    }

    #[test]
    fn blank_name_becomes_none() {
        let record = DiagnosisRecord::evaluate(
            DiagnosisId::new(),
            Some("   ".to_string()),
            AnswerSet::new(),
            ConcernSelection::default(),
            &questions(),
            &reference_shaped_catalog(),
        )
        .unwrap();

        assert!(record.respondent_name.is_none());
        assert_eq!(record.leadership_type, LeadershipTypeCode::L08);
        assert_eq!(record.concern_analysis.combination_id, CombinationId::P08);
    }

    #[test]
    fn overlong_name_is_rejected() {
        let err = DiagnosisRecord::evaluate(
            DiagnosisId::new(),
            Some("x".repeat(MAX_RESPONDENT_NAME_LEN + 1)),
            AnswerSet::new(),
            ConcernSelection::default(),
            &questions(),
            &reference_shaped_catalog(),
        )
        .unwrap_err();

        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }
}
