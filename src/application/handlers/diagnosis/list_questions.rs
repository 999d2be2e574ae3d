//! ListQuestionsHandler - Query handler for the questionnaire.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::questionnaire::QuestionCatalog;
use crate::ports::ContentReader;

/// Query for the full questionnaire.
#[derive(Debug, Clone, Default)]
pub struct ListQuestionsQuery;

pub struct ListQuestionsHandler {
    content: Arc<dyn ContentReader>,
}

impl ListQuestionsHandler {
    pub fn new(content: Arc<dyn ContentReader>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, _query: ListQuestionsQuery) -> Result<Arc<QuestionCatalog>, DomainError> {
        Ok(self.content.question_catalog().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::StaticContentReader;
    use crate::application::handlers::diagnosis::test_support::UnavailableContentReader;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn returns_catalog_in_order() {
        let handler = ListQuestionsHandler::new(Arc::new(StaticContentReader::embedded()));

        let catalog = handler.handle(ListQuestionsQuery).await.unwrap();

        let ids: Vec<u32> = catalog.questions().iter().map(|q| q.id.value()).collect();
        assert_eq!(ids, (1..=23).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn propagates_unavailable_content() {
        let handler = ListQuestionsHandler::new(Arc::new(UnavailableContentReader));

        let err = handler.handle(ListQuestionsQuery).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentUnavailable);
    }
}
