//! Content reader port.
//!
//! Supplies the question and concern catalogs plus the result content shown
//! for a leadership type or a concern combination. The embedded reference
//! data and a database-backed source both sit behind this trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::concern::{CombinationId, ConcernCatalog};
use crate::domain::content::Solution;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::leadership::{LeadershipTypeCode, LeadershipTypeProfile};
use crate::domain::questionnaire::QuestionCatalog;

/// Errors that can occur while reading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Backing store could not be reached or queried
    #[error("Content source unavailable: {0}")]
    Unavailable(String),

    /// Stored content failed catalog validation
    #[error("Invalid content: {0}")]
    Invalid(#[from] ValidationError),

    /// A stored row could not be decoded
    #[error("Malformed content row: {0}")]
    Malformed(String),
}

impl From<ContentError> for DomainError {
    fn from(err: ContentError) -> Self {
        let code = match err {
            ContentError::Unavailable(_) => ErrorCode::ContentUnavailable,
            ContentError::Invalid(_) | ContentError::Malformed(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Read port for diagnosis content.
///
/// Catalogs are returned behind `Arc` so callers can hold them across
/// awaits without copying.
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// The questionnaire, in display order.
    async fn question_catalog(&self) -> Result<Arc<QuestionCatalog>, ContentError>;

    /// The concern catalog with its category denominators.
    async fn concern_catalog(&self) -> Result<Arc<ConcernCatalog>, ContentError>;

    /// Result content for a leadership type, `None` if absent.
    async fn leadership_type(
        &self,
        code: LeadershipTypeCode,
    ) -> Result<Option<LeadershipTypeProfile>, ContentError>;

    /// Solution content for a combination, `None` if absent.
    async fn solution(&self, combination: CombinationId) -> Result<Option<Solution>, ContentError>;
}
