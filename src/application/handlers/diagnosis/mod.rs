//! Diagnosis handlers - questionnaire, concern analysis, and recorded results.
//!
//! # Queries
//!
//! - `ListQuestionsHandler` / `ListConcernsHandler` - catalogs for the wizard
//! - `GetDiagnosisHandler` - a recorded diagnosis with its content
//! - `GetLeadershipTypeHandler` / `GetSolutionHandler` - content by code
//! - `GetDiagnosisStatsHandler` - number of recorded diagnoses
//!
//! # Commands
//!
//! - `ClassifyLeadershipHandler` - answers to leadership type
//! - `AnalyzeConcernsHandler` - concerns to solution combination
//! - `SubmitDiagnosisHandler` - both, recorded

mod analyze_concerns;
mod classify_leadership;
mod get_diagnosis;
mod get_diagnosis_stats;
mod get_leadership_type;
mod get_solution;
mod list_concerns;
mod list_questions;
mod results;
mod submit_diagnosis;

#[cfg(test)]
pub(crate) mod test_support;

pub use analyze_concerns::{AnalyzeConcernsCommand, AnalyzeConcernsHandler};
pub use classify_leadership::{ClassifyLeadershipCommand, ClassifyLeadershipHandler};
pub use get_diagnosis::{GetDiagnosisHandler, GetDiagnosisQuery};
pub use get_diagnosis_stats::{DiagnosisStats, GetDiagnosisStatsHandler, GetDiagnosisStatsQuery};
pub use get_leadership_type::{GetLeadershipTypeHandler, GetLeadershipTypeQuery};
pub use get_solution::{GetSolutionHandler, GetSolutionQuery};
pub use list_concerns::{ListConcernsHandler, ListConcernsQuery};
pub use list_questions::{ListQuestionsHandler, ListQuestionsQuery};
pub use results::{ConcernResult, DiagnosisResult, LeadershipResult};
pub use submit_diagnosis::{SubmitDiagnosisCommand, SubmitDiagnosisHandler};
