//! GetSolutionHandler - Content lookup by combination id.

use std::sync::Arc;

use crate::domain::concern::CombinationId;
use crate::domain::content::Solution;
use crate::domain::foundation::DomainError;
use crate::ports::ContentReader;

use super::results::require_solution;

#[derive(Debug, Clone)]
pub struct GetSolutionQuery {
    pub combination: CombinationId,
}

pub struct GetSolutionHandler {
    content: Arc<dyn ContentReader>,
}

impl GetSolutionHandler {
    pub fn new(content: Arc<dyn ContentReader>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, query: GetSolutionQuery) -> Result<Solution, DomainError> {
        require_solution(self.content.as_ref(), query.combination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::StaticContentReader;
    use crate::application::handlers::diagnosis::test_support::EmptyResultContentReader;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn returns_solution_for_combination() {
        let handler = GetSolutionHandler::new(Arc::new(StaticContentReader::embedded()));

        let solution = handler
            .handle(GetSolutionQuery {
                combination: CombinationId::P07,
            })
            .await
            .unwrap();

        assert_eq!(solution.id, CombinationId::P07);
    }

    #[tokio::test]
    async fn missing_solution_is_not_found() {
        let handler = GetSolutionHandler::new(Arc::new(EmptyResultContentReader::new()));

        let err = handler
            .handle(GetSolutionQuery {
                combination: CombinationId::P01,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SolutionNotFound);
        assert!(err.is_not_found());
    }
}
