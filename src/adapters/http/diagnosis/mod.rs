//! HTTP adapter for the diagnosis module.
//!
//! Exposes the questionnaire, both scoring engines, recorded diagnoses and
//! result content via REST endpoints:
//!
//! - `GET /api/questions`, `GET /api/concerns`
//! - `POST /api/diagnosis/leadership`, `POST /api/diagnosis/concerns`
//! - `POST /api/diagnoses`, `GET /api/diagnoses/:id`, `GET /api/stats`
//! - `GET /api/leadership-types/:code`, `GET /api/solutions/:code`
//! - `GET /health`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{DiagnosisApiError, DiagnosisAppState};
pub use routes::{diagnosis_router, diagnosis_routes};
