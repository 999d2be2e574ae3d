//! Axum router configuration for diagnosis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_concerns, classify_leadership, get_diagnosis, get_leadership_type, get_solution,
    get_stats, health, list_concerns, list_questions, submit_diagnosis, DiagnosisAppState,
};

/// Create the diagnosis API router.
///
/// # Routes
///
/// ## Catalogs
/// - `GET /questions` - The questionnaire
/// - `GET /concerns` - The concern catalog and selection limit
///
/// ## Scoring
/// - `POST /diagnosis/leadership` - Classify answers
/// - `POST /diagnosis/concerns` - Analyze a concern selection
///
/// ## Recorded diagnoses
/// - `POST /diagnoses` - Score and record a full diagnosis
/// - `GET /diagnoses/:id` - Fetch a recorded diagnosis
/// - `GET /stats` - Number of recorded diagnoses
///
/// ## Content
/// - `GET /leadership-types/:code` - Content for a leadership type
/// - `GET /solutions/:code` - Content for a concern combination
pub fn diagnosis_routes() -> Router<DiagnosisAppState> {
    Router::new()
        // Catalogs
        .route("/questions", get(list_questions))
        .route("/concerns", get(list_concerns))
        // Scoring
        .route("/diagnosis/leadership", post(classify_leadership))
        .route("/diagnosis/concerns", post(analyze_concerns))
        // Recorded diagnoses
        .route("/diagnoses", post(submit_diagnosis))
        .route("/diagnoses/:id", get(get_diagnosis))
        .route("/stats", get(get_stats))
        // Content
        .route("/leadership-types/:code", get(get_leadership_type))
        .route("/solutions/:code", get(get_solution))
}

/// Create the complete service router.
///
/// Mounts the API under `/api` and the liveness probe at `/health`.
///
/// # Example
///
/// ```ignore
/// let app = diagnosis_router(state);
/// axum::serve(listener, app).await?;
/// ```
pub fn diagnosis_router(state: DiagnosisAppState) -> Router {
    Router::new()
        .nest("/api", diagnosis_routes())
        .route("/health", get(health))
        .with_state(state)
}
