//! AnalyzeConcernsHandler - Maps selected concerns to a solution combination.

use std::sync::Arc;

use crate::domain::concern::ConcernAnalyzer;
use crate::domain::foundation::{ConcernId, DomainError};
use crate::ports::ContentReader;

use super::results::{require_solution, ConcernResult};

/// Command carrying raw concern ids.
///
/// Unknown ids are ignored and duplicates are counted each time they appear.
#[derive(Debug, Clone)]
pub struct AnalyzeConcernsCommand {
    pub concern_ids: Vec<ConcernId>,
}

pub struct AnalyzeConcernsHandler {
    content: Arc<dyn ContentReader>,
}

impl AnalyzeConcernsHandler {
    pub fn new(content: Arc<dyn ContentReader>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, cmd: AnalyzeConcernsCommand) -> Result<ConcernResult, DomainError> {
        let catalog = self.content.concern_catalog().await?;

        let tally = ConcernAnalyzer::tally(&cmd.concern_ids, &catalog);
        let z_scores = ConcernAnalyzer::z_scores(&tally, &catalog);
        let analysis = ConcernAnalyzer::analyze(&cmd.concern_ids, &catalog);

        tracing::debug!(
            selected = cmd.concern_ids.len(),
            primary_a = ?analysis.primary_a,
            primary_b = ?analysis.primary_b,
            combination = %analysis.combination_id,
            "Analyzed concerns"
        );

        let solution = require_solution(self.content.as_ref(), analysis.combination_id).await?;

        Ok(ConcernResult {
            tally,
            z_scores,
            analysis,
            solution,
        })
    }
}
