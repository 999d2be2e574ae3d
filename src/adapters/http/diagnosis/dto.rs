//! HTTP DTOs (Data Transfer Objects) for diagnosis endpoints.
//!
//! These types define the JSON request/response structure for the diagnosis API.
//! They serve as the boundary between HTTP and the application layer.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{ConcernResult, DiagnosisResult, LeadershipResult};
use crate::domain::concern::{
    CategoryCounts, CategoryZScores, CombinationId, Concern, ConcernCatalog, ConcernCategory,
};
use crate::domain::content::{ActionItem, Solution};
use crate::domain::foundation::{ConcernId, LikertScore, QuestionId, ValidationError};
use crate::domain::leadership::{DimensionScores, LeadershipTypeCode, LeadershipTypeProfile};
use crate::domain::questionnaire::{AnswerSet, Dimension, Question, QuestionCatalog};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Answers keyed by question id, e.g. `{"1": 5, "2": 4}`.
///
/// Keys and scores are taken as any JSON number here and validated on
/// conversion, so a bad value becomes a 400 with a field name rather than a
/// body rejection. Whole floats such as `5.0` are accepted.
pub type RawAnswers = BTreeMap<String, serde_json::Number>;

/// Request to classify a set of answers.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyLeadershipRequest {
    #[serde(default)]
    pub answers: RawAnswers,
}

/// Request to analyze a concern selection.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeConcernsRequest {
    #[serde(default)]
    pub concern_ids: Vec<String>,
}

/// Request to score and record a full diagnosis.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitDiagnosisRequest {
    #[serde(default)]
    pub respondent_name: Option<String>,
    #[serde(default)]
    pub answers: RawAnswers,
    #[serde(default)]
    pub concern_ids: Vec<String>,
}

/// Converts raw answers into a validated answer set.
pub fn parse_answers(raw: &RawAnswers) -> Result<AnswerSet, ValidationError> {
    let mut pairs = Vec::with_capacity(raw.len());
    for (key, score) in raw {
        let id: QuestionId = key.parse()?;
        let score = whole_score(key, score)?;
        let score = u8::try_from(score).map_err(|_| {
            ValidationError::out_of_range(
                format!("answers[{}]", key),
                LikertScore::MIN as i32,
                LikertScore::MAX as i32,
                score.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            )
        })?;
        pairs.push((id.value(), score));
    }
    AnswerSet::from_raw(pairs)
}

fn whole_score(key: &str, score: &serde_json::Number) -> Result<i64, ValidationError> {
    if let Some(value) = score.as_i64() {
        return Ok(value);
    }
    match score.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => Ok(value as i64),
        _ => Err(ValidationError::invalid_format(
            format!("answers[{}]", key),
            format!("score must be a whole number, got {}", score),
        )),
    }
}

/// Converts raw concern ids, rejecting blank ones.
pub fn parse_concern_ids(raw: &[String]) -> Result<Vec<ConcernId>, ValidationError> {
    raw.iter().map(|id| ConcernId::new(id.as_str())).collect()
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: u32,
    pub text: String,
    pub dimension: Dimension,
    pub dimension_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdimension: Option<String>,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.value(),
            text: question.text.clone(),
            dimension: question.dimension,
            dimension_label: question.dimension.label().to_string(),
            subdimension: question.subdimension.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
    pub total: usize,
}

impl From<&QuestionCatalog> for QuestionListResponse {
    fn from(catalog: &QuestionCatalog) -> Self {
        Self {
            questions: catalog.questions().iter().map(QuestionResponse::from).collect(),
            total: catalog.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcernResponse {
    pub id: String,
    pub label: String,
    pub categories: Vec<ConcernCategory>,
    /// Display labels, parallel to `categories`.
    pub category_labels: Vec<String>,
    pub group_name: String,
}

impl From<&Concern> for ConcernResponse {
    fn from(concern: &Concern) -> Self {
        Self {
            id: concern.id.as_str().to_string(),
            label: concern.label.clone(),
            categories: concern.categories.clone(),
            category_labels: concern
                .categories
                .iter()
                .map(|category| category.label().to_string())
                .collect(),
            group_name: concern.group_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcernListResponse {
    pub concerns: Vec<ConcernResponse>,
    /// How many concerns a submission may include.
    pub max_selected: usize,
}

impl ConcernListResponse {
    pub fn new(catalog: &ConcernCatalog, max_selected: usize) -> Self {
        Self {
            concerns: catalog.concerns().iter().map(ConcernResponse::from).collect(),
            max_selected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadershipTypeResponse {
    pub code: LeadershipTypeCode,
    pub name: String,
    pub title: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<LeadershipTypeProfile> for LeadershipTypeResponse {
    fn from(profile: LeadershipTypeProfile) -> Self {
        Self {
            code: profile.code,
            name: profile.name,
            title: profile.title,
            description: profile.description,
            strengths: profile.strengths,
            growth_areas: profile.growth_areas,
            image: profile.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionResponse {
    pub id: CombinationId,
    pub title: String,
    pub core_issue: String,
    pub field_voices: Vec<String>,
    pub diagnosis: String,
    pub actions: Vec<ActionItem>,
}

impl From<Solution> for SolutionResponse {
    fn from(solution: Solution) -> Self {
        Self {
            id: solution.id,
            title: solution.title,
            core_issue: solution.core_issue,
            field_voices: solution.field_voices,
            diagnosis: solution.diagnosis,
            actions: solution.actions,
        }
    }
}

/// Leadership classification result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadershipResultResponse {
    pub scores: DimensionScores,
    pub leadership_type: LeadershipTypeCode,
    pub profile: LeadershipTypeResponse,
}

impl From<LeadershipResult> for LeadershipResultResponse {
    fn from(result: LeadershipResult) -> Self {
        Self {
            scores: result.dimension_scores,
            leadership_type: result.leadership_type,
            profile: result.profile.into(),
        }
    }
}

/// Concern analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcernAnalysisResponse {
    pub tally: CategoryCounts,
    pub z_scores: CategoryZScores,
    pub primary_a: Option<ConcernCategory>,
    pub primary_b: Option<ConcernCategory>,
    pub combination_id: CombinationId,
    pub solution: SolutionResponse,
}

impl From<ConcernResult> for ConcernAnalysisResponse {
    fn from(result: ConcernResult) -> Self {
        Self {
            tally: result.tally,
            z_scores: result.z_scores,
            primary_a: result.analysis.primary_a,
            primary_b: result.analysis.primary_b,
            combination_id: result.analysis.combination_id,
            solution: result.solution.into(),
        }
    }
}

/// Concern part of a recorded diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisConcernsResponse {
    pub selected: Vec<String>,
    pub primary_a: Option<ConcernCategory>,
    pub primary_b: Option<ConcernCategory>,
    pub combination_id: CombinationId,
    pub solution: SolutionResponse,
}

/// A recorded diagnosis with both results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub leadership: LeadershipResultResponse,
    pub concerns: DiagnosisConcernsResponse,
}

impl From<DiagnosisResult> for DiagnosisResponse {
    fn from(result: DiagnosisResult) -> Self {
        let record = result.record;
        Self {
            id: record.id.to_string(),
            respondent_name: record.respondent_name,
            created_at: record.created_at,
            leadership: LeadershipResultResponse {
                scores: record.dimension_scores,
                leadership_type: record.leadership_type,
                profile: result.profile.into(),
            },
            concerns: DiagnosisConcernsResponse {
                selected: record
                    .selected_concerns
                    .iter()
                    .map(|id| id.as_str().to_string())
                    .collect(),
                primary_a: record.concern_analysis.primary_a,
                primary_b: record.concern_analysis.primary_b,
                combination_id: record.concern_analysis.combination_id,
                solution: result.solution.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_recorded: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Error response for API errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches string details; an empty map leaves `details` unset.
    pub fn with_details(mut self, details: &HashMap<String, String>) -> Self {
        if !details.is_empty() {
            self.details = serde_json::to_value(details).ok();
        }
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_request_deserializes_answers_map() {
        let json = r#"{"answers": {"1": 5, "17": 2}}"#;
        let request: ClassifyLeadershipRequest = serde_json::from_str(json).unwrap();

        let answers = parse_answers(&request.answers).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get(QuestionId::new(17)).map(|s| s.value()), Some(2));
    }

    fn raw(pairs: &[(&str, i64)]) -> RawAnswers {
        pairs
            .iter()
            .map(|(key, score)| (key.to_string(), serde_json::Number::from(*score)))
            .collect()
    }

    #[test]
    fn whole_float_scores_are_accepted() {
        let request: ClassifyLeadershipRequest =
            serde_json::from_str(r#"{"answers": {"1": 5.0}}"#).unwrap();

        let answers = parse_answers(&request.answers).unwrap();
        assert_eq!(answers.get(QuestionId::new(1)).map(|s| s.value()), Some(5));
    }

    #[test]
    fn fractional_score_is_invalid_format() {
        let request: ClassifyLeadershipRequest =
            serde_json::from_str(r#"{"answers": {"2": 4.5}}"#).unwrap();

        let err = parse_answers(&request.answers).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "answers[2]"));
    }

    #[test]
    fn score_above_scale_is_out_of_range() {
        let raw = raw(&[("3", 7)]);
        let err = parse_answers(&raw).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn negative_score_is_out_of_range() {
        let raw = raw(&[("3", -1)]);
        let err = parse_answers(&raw).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: -1, .. }));
    }

    #[test]
    fn non_numeric_question_key_is_rejected() {
        let raw = raw(&[("q1", 3)]);
        assert!(parse_answers(&raw).is_err());
    }

    #[test]
    fn blank_concern_id_is_rejected() {
        let err = parse_concern_ids(&["k01".to_string(), " ".to_string()]).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn question_response_carries_dimension_label() {
        let question = Question::new(9, "Shares knowledge", Dimension::Sharing);
        let json = serde_json::to_value(QuestionResponse::from(&question)).unwrap();

        assert_eq!(json["dimension"], "sharing");
        assert_eq!(json["dimension_label"], "Sharing");
    }

    #[test]
    fn submit_request_fields_default() {
        let request: SubmitDiagnosisRequest = serde_json::from_str("{}").unwrap();
        assert!(request.respondent_name.is_none());
        assert!(request.answers.is_empty());
        assert!(request.concern_ids.is_empty());
    }

    #[test]
    fn error_response_omits_empty_details() {
        let response = ErrorResponse::new("NOT_FOUND", "Not found").with_details(&HashMap::new());
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn concern_response_uses_category_letters() {
        let concern = Concern {
            id: ConcernId::new("k15").unwrap(),
            label: "x".to_string(),
            categories: vec![ConcernCategory::C, ConcernCategory::L],
            group_name: "Direction".to_string(),
        };
        let json = serde_json::to_value(ConcernResponse::from(&concern)).unwrap();
        assert_eq!(json["categories"], serde_json::json!(["C", "L"]));
        assert_eq!(
            json["category_labels"],
            serde_json::json!(["Collaboration & Culture", "Leadership Direction"])
        );
    }
}
