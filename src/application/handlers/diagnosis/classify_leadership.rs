//! ClassifyLeadershipHandler - Scores answers and returns the leadership type.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::leadership::LeadershipClassifier;
use crate::domain::questionnaire::AnswerSet;
use crate::ports::ContentReader;

use super::results::{require_profile, LeadershipResult};

/// Command carrying a (possibly partial) set of answers.
#[derive(Debug, Clone)]
pub struct ClassifyLeadershipCommand {
    pub answers: AnswerSet,
}

/// Handler for leadership classification.
///
/// Answers to ids missing from the catalog are ignored; unanswered questions
/// pull their dimension mean down.
pub struct ClassifyLeadershipHandler {
    content: Arc<dyn ContentReader>,
}

impl ClassifyLeadershipHandler {
    pub fn new(content: Arc<dyn ContentReader>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, cmd: ClassifyLeadershipCommand) -> Result<LeadershipResult, DomainError> {
        let catalog = self.content.question_catalog().await?;

        let dimension_scores = LeadershipClassifier::dimension_scores(&cmd.answers, &catalog);
        let leadership_type = dimension_scores.levels().leadership_type();

        tracing::debug!(
            answered = cmd.answers.len(),
            growth = dimension_scores.growth,
            sharing = dimension_scores.sharing,
            interaction = dimension_scores.interaction,
            leadership_type = %leadership_type,
            "Classified leadership answers"
        );

        let profile = require_profile(self.content.as_ref(), leadership_type).await?;

        Ok(LeadershipResult {
            dimension_scores,
            leadership_type,
            profile,
        })
    }
}
