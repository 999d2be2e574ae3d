//! Diagnosis repository port.

use async_trait::async_trait;

use crate::domain::diagnosis::DiagnosisRecord;
use crate::domain::foundation::{DiagnosisId, DomainError, ErrorCode};

/// Errors that can occur in diagnosis persistence.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisRepositoryError {
    /// A record with this id is already stored
    #[error("Diagnosis {0} already exists")]
    Duplicate(DiagnosisId),

    /// Database or storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<DiagnosisRepositoryError> for DomainError {
    fn from(err: DiagnosisRepositoryError) -> Self {
        let code = match err {
            DiagnosisRepositoryError::Duplicate(_) => ErrorCode::ValidationFailed,
            DiagnosisRepositoryError::Storage(_) => ErrorCode::DatabaseError,
            DiagnosisRepositoryError::Serialization(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Repository for completed diagnoses.
///
/// Records are immutable once saved.
#[async_trait]
pub trait DiagnosisRepository: Send + Sync {
    /// Stores a new record. Fails with `Duplicate` if the id is taken.
    async fn save(&self, record: &DiagnosisRecord) -> Result<(), DiagnosisRepositoryError>;

    /// Finds a record by id.
    async fn find_by_id(
        &self,
        id: &DiagnosisId,
    ) -> Result<Option<DiagnosisRecord>, DiagnosisRepositoryError>;

    /// Number of stored records.
    async fn count(&self) -> Result<u64, DiagnosisRepositoryError>;
}
