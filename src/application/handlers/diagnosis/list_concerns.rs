//! ListConcernsHandler - Query handler for the concern catalog.

use std::sync::Arc;

use crate::domain::concern::ConcernCatalog;
use crate::domain::foundation::DomainError;
use crate::ports::ContentReader;

/// Query for the full concern catalog.
#[derive(Debug, Clone, Default)]
pub struct ListConcernsQuery;

pub struct ListConcernsHandler {
    content: Arc<dyn ContentReader>,
}

impl ListConcernsHandler {
    pub fn new(content: Arc<dyn ContentReader>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, _query: ListConcernsQuery) -> Result<Arc<ConcernCatalog>, DomainError> {
        Ok(self.content.concern_catalog().await?)
    }
}
