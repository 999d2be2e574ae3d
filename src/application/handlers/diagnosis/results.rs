//! Result types shared by the diagnosis handlers, plus content lookups that
//! treat missing result content as an error.

use crate::domain::concern::{CategoryCounts, CategoryZScores, CombinationId, ConcernAnalysis};
use crate::domain::content::Solution;
use crate::domain::diagnosis::DiagnosisRecord;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::leadership::{DimensionScores, LeadershipTypeCode, LeadershipTypeProfile};
use crate::ports::ContentReader;

/// Leadership classification with its display content.
#[derive(Debug, Clone)]
pub struct LeadershipResult {
    pub dimension_scores: DimensionScores,
    pub leadership_type: LeadershipTypeCode,
    pub profile: LeadershipTypeProfile,
}

/// Concern analysis with intermediate values and the matched solution.
#[derive(Debug, Clone)]
pub struct ConcernResult {
    pub tally: CategoryCounts,
    pub z_scores: CategoryZScores,
    pub analysis: ConcernAnalysis,
    pub solution: Solution,
}

/// A stored diagnosis with the content for both of its results.
#[derive(Debug, Clone)]
pub struct DiagnosisResult {
    pub record: DiagnosisRecord,
    pub profile: LeadershipTypeProfile,
    pub solution: Solution,
}

pub(crate) async fn require_profile(
    content: &dyn ContentReader,
    code: LeadershipTypeCode,
) -> Result<LeadershipTypeProfile, DomainError> {
    content.leadership_type(code).await?.ok_or_else(|| {
        DomainError::new(
            ErrorCode::LeadershipTypeNotFound,
            format!("No content for leadership type {}", code),
        )
        .with_detail("code", code.as_str())
    })
}

pub(crate) async fn require_solution(
    content: &dyn ContentReader,
    combination: CombinationId,
) -> Result<Solution, DomainError> {
    content.solution(combination).await?.ok_or_else(|| {
        DomainError::new(
            ErrorCode::SolutionNotFound,
            format!("No solution for combination {}", combination),
        )
        .with_detail("code", combination.as_str())
    })
}
