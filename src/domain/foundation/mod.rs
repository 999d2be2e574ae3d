//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the diagnosis domain.

mod errors;
mod ids;
mod likert;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConcernId, DiagnosisId, QuestionId};
pub use likert::LikertScore;
