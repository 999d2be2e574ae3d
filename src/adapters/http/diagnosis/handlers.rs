//! HTTP handlers for diagnosis endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    AnalyzeConcernsCommand, AnalyzeConcernsHandler, ClassifyLeadershipCommand,
    ClassifyLeadershipHandler, GetDiagnosisHandler, GetDiagnosisQuery, GetDiagnosisStatsHandler,
    GetDiagnosisStatsQuery, GetLeadershipTypeHandler, GetLeadershipTypeQuery, GetSolutionHandler,
    GetSolutionQuery, ListConcernsHandler, ListConcernsQuery, ListQuestionsHandler,
    ListQuestionsQuery, SubmitDiagnosisCommand, SubmitDiagnosisHandler,
};
use crate::domain::concern::CombinationId;
use crate::domain::foundation::{DiagnosisId, DomainError, ErrorCode, ValidationError};
use crate::domain::leadership::LeadershipTypeCode;
use crate::ports::{ContentReader, DiagnosisRepository};

use super::dto::{
    parse_answers, parse_concern_ids, AnalyzeConcernsRequest, ClassifyLeadershipRequest,
    ConcernAnalysisResponse, ConcernListResponse, DiagnosisResponse, ErrorResponse,
    HealthResponse, LeadershipResultResponse, LeadershipTypeResponse, QuestionListResponse,
    SolutionResponse, StatsResponse, SubmitDiagnosisRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct DiagnosisAppState {
    pub content: Arc<dyn ContentReader>,
    pub repository: Arc<dyn DiagnosisRepository>,
    pub max_selected_concerns: usize,
    /// Include internal error messages in 5xx responses.
    pub verbose_errors: bool,
}

impl DiagnosisAppState {
    pub fn list_questions_handler(&self) -> ListQuestionsHandler {
        ListQuestionsHandler::new(self.content.clone())
    }

    pub fn list_concerns_handler(&self) -> ListConcernsHandler {
        ListConcernsHandler::new(self.content.clone())
    }

    pub fn classify_leadership_handler(&self) -> ClassifyLeadershipHandler {
        ClassifyLeadershipHandler::new(self.content.clone())
    }

    pub fn analyze_concerns_handler(&self) -> AnalyzeConcernsHandler {
        AnalyzeConcernsHandler::new(self.content.clone())
    }

    pub fn submit_diagnosis_handler(&self) -> SubmitDiagnosisHandler {
        SubmitDiagnosisHandler::new(
            self.content.clone(),
            self.repository.clone(),
            self.max_selected_concerns,
        )
    }

    pub fn get_diagnosis_handler(&self) -> GetDiagnosisHandler {
        GetDiagnosisHandler::new(self.content.clone(), self.repository.clone())
    }

    pub fn get_leadership_type_handler(&self) -> GetLeadershipTypeHandler {
        GetLeadershipTypeHandler::new(self.content.clone())
    }

    pub fn get_solution_handler(&self) -> GetSolutionHandler {
        GetSolutionHandler::new(self.content.clone())
    }

    pub fn stats_handler(&self) -> GetDiagnosisStatsHandler {
        GetDiagnosisStatsHandler::new(self.repository.clone())
    }

    /// Converts a domain error, hiding internal messages unless verbose.
    fn api_error(&self, err: DomainError) -> DiagnosisApiError {
        let api_error = DiagnosisApiError::from(err);
        if !api_error.is_server_error() {
            return api_error;
        }
        tracing::error!(error = ?api_error, "Diagnosis request failed");
        if self.verbose_errors {
            api_error
        } else {
            api_error.redacted()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/questions - List the questionnaire
pub async fn list_questions(
    State(state): State<DiagnosisAppState>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let catalog = state
        .list_questions_handler()
        .handle(ListQuestionsQuery)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(QuestionListResponse::from(catalog.as_ref())))
}

/// GET /api/concerns - List the concern catalog
pub async fn list_concerns(
    State(state): State<DiagnosisAppState>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let catalog = state
        .list_concerns_handler()
        .handle(ListConcernsQuery)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ConcernListResponse::new(&catalog, state.max_selected_concerns)))
}

/// POST /api/diagnosis/leadership - Classify answers
pub async fn classify_leadership(
    State(state): State<DiagnosisAppState>,
    Json(request): Json<ClassifyLeadershipRequest>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let answers = parse_answers(&request.answers)?;

    let result = state
        .classify_leadership_handler()
        .handle(ClassifyLeadershipCommand { answers })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(LeadershipResultResponse::from(result)))
}

/// POST /api/diagnosis/concerns - Analyze a concern selection
pub async fn analyze_concerns(
    State(state): State<DiagnosisAppState>,
    Json(request): Json<AnalyzeConcernsRequest>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let concern_ids = parse_concern_ids(&request.concern_ids)?;

    let result = state
        .analyze_concerns_handler()
        .handle(AnalyzeConcernsCommand { concern_ids })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ConcernAnalysisResponse::from(result)))
}

/// POST /api/diagnoses - Score and record a full diagnosis
pub async fn submit_diagnosis(
    State(state): State<DiagnosisAppState>,
    Json(request): Json<SubmitDiagnosisRequest>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let cmd = SubmitDiagnosisCommand {
        respondent_name: request.respondent_name,
        answers: parse_answers(&request.answers)?,
        concern_ids: parse_concern_ids(&request.concern_ids)?,
    };

    let result = state
        .submit_diagnosis_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok((StatusCode::CREATED, Json(DiagnosisResponse::from(result))))
}

/// GET /api/diagnoses/:id - Fetch a recorded diagnosis
pub async fn get_diagnosis(
    State(state): State<DiagnosisAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let id: DiagnosisId = id
        .parse()
        .map_err(|_| DiagnosisApiError::BadRequest("Invalid diagnosis ID format".to_string()))?;

    let result = state
        .get_diagnosis_handler()
        .handle(GetDiagnosisQuery { id })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(DiagnosisResponse::from(result)))
}

/// GET /api/leadership-types/:code - Content for a leadership type
pub async fn get_leadership_type(
    State(state): State<DiagnosisAppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let code: LeadershipTypeCode = code
        .parse()
        .map_err(|_| not_found(ErrorCode::LeadershipTypeNotFound, "Leadership type", &code))?;

    let profile = state
        .get_leadership_type_handler()
        .handle(GetLeadershipTypeQuery { code })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(LeadershipTypeResponse::from(profile)))
}

/// GET /api/solutions/:code - Content for a concern combination
pub async fn get_solution(
    State(state): State<DiagnosisAppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let combination: CombinationId = code
        .parse()
        .map_err(|_| not_found(ErrorCode::SolutionNotFound, "Solution", &code))?;

    let solution = state
        .get_solution_handler()
        .handle(GetSolutionQuery { combination })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(SolutionResponse::from(solution)))
}

/// GET /api/stats - Number of recorded diagnoses
pub async fn get_stats(
    State(state): State<DiagnosisAppState>,
) -> Result<impl IntoResponse, DiagnosisApiError> {
    let stats = state
        .stats_handler()
        .handle(GetDiagnosisStatsQuery)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(StatsResponse {
        total_recorded: stats.total_recorded,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum DiagnosisApiError {
    BadRequest(String),
    /// Rejected input, keeping the domain error code and details.
    Invalid(ErrorResponse),
    NotFound(ErrorResponse),
    Unavailable(String),
    Internal(String),
}

impl DiagnosisApiError {
    fn is_server_error(&self) -> bool {
        matches!(self, DiagnosisApiError::Unavailable(_) | DiagnosisApiError::Internal(_))
    }

    fn redacted(self) -> Self {
        match self {
            DiagnosisApiError::Unavailable(_) => {
                DiagnosisApiError::Unavailable("Content is temporarily unavailable".to_string())
            }
            DiagnosisApiError::Internal(_) => {
                DiagnosisApiError::Internal("An internal error occurred".to_string())
            }
            other => other,
        }
    }
}

impl From<DomainError> for DiagnosisApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::SelectionLimitReached => DiagnosisApiError::Invalid(error_body(&err)),
            ErrorCode::DiagnosisNotFound
            | ErrorCode::LeadershipTypeNotFound
            | ErrorCode::SolutionNotFound => DiagnosisApiError::NotFound(error_body(&err)),
            ErrorCode::ContentUnavailable => DiagnosisApiError::Unavailable(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                DiagnosisApiError::Internal(err.message)
            }
        }
    }
}

fn error_body(err: &DomainError) -> ErrorResponse {
    ErrorResponse::new(err.code.to_string(), err.message.clone()).with_details(&err.details)
}

fn not_found(code: ErrorCode, resource: &str, id: &str) -> DiagnosisApiError {
    DiagnosisApiError::NotFound(ErrorResponse::new(
        code.to_string(),
        format!("{} not found: {}", resource, id),
    ))
}

impl From<ValidationError> for DiagnosisApiError {
    fn from(err: ValidationError) -> Self {
        DomainError::from(err).into()
    }
}

impl IntoResponse for DiagnosisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DiagnosisApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DiagnosisApiError::Invalid(error) => (StatusCode::BAD_REQUEST, error),
            DiagnosisApiError::NotFound(error) => (StatusCode::NOT_FOUND, error),
            DiagnosisApiError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(ErrorCode::ContentUnavailable.to_string(), msg),
            ),
            DiagnosisApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
