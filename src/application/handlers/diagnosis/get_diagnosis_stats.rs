//! GetDiagnosisStatsHandler - Counts recorded diagnoses.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::DiagnosisRepository;

#[derive(Debug, Clone, Default)]
pub struct GetDiagnosisStatsQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisStats {
    pub total_recorded: u64,
}

pub struct GetDiagnosisStatsHandler {
    repository: Arc<dyn DiagnosisRepository>,
}

impl GetDiagnosisStatsHandler {
    pub fn new(repository: Arc<dyn DiagnosisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: GetDiagnosisStatsQuery) -> Result<DiagnosisStats, DomainError> {
        Ok(DiagnosisStats {
            total_recorded: self.repository.count().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::diagnosis::InMemoryDiagnosisRepository;

    #[tokio::test]
    async fn empty_repository_counts_zero() {
        let handler = GetDiagnosisStatsHandler::new(Arc::new(InMemoryDiagnosisRepository::new()));

        let stats = handler.handle(GetDiagnosisStatsQuery).await.unwrap();
        assert_eq!(stats.total_recorded, 0);
    }
}
