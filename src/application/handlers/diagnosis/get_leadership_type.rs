//! GetLeadershipTypeHandler - Content lookup by leadership type code.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::leadership::{LeadershipTypeCode, LeadershipTypeProfile};
use crate::ports::ContentReader;

use super::results::require_profile;

#[derive(Debug, Clone)]
pub struct GetLeadershipTypeQuery {
    pub code: LeadershipTypeCode,
}

pub struct GetLeadershipTypeHandler {
    content: Arc<dyn ContentReader>,
}

impl GetLeadershipTypeHandler {
    pub fn new(content: Arc<dyn ContentReader>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, query: GetLeadershipTypeQuery) -> Result<LeadershipTypeProfile, DomainError> {
        require_profile(self.content.as_ref(), query.code).await
    }
}
