//! In-memory diagnosis repository.
//!
//! Used when no database is configured, and in tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::diagnosis::DiagnosisRecord;
use crate::domain::foundation::DiagnosisId;
use crate::ports::{DiagnosisRepository, DiagnosisRepositoryError};

/// In-memory storage for completed diagnoses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiagnosisRepository {
    records: Arc<RwLock<HashMap<DiagnosisId, DiagnosisRecord>>>,
}

impl InMemoryDiagnosisRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored records (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl DiagnosisRepository for InMemoryDiagnosisRepository {
    async fn save(&self, record: &DiagnosisRecord) -> Result<(), DiagnosisRepositoryError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(DiagnosisRepositoryError::Duplicate(record.id));
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &DiagnosisId,
    ) -> Result<Option<DiagnosisRecord>, DiagnosisRepositoryError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn count(&self) -> Result<u64, DiagnosisRepositoryError> {
        Ok(self.records.read().await.len() as u64)
    }
}
