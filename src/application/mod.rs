//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::diagnosis::{
    AnalyzeConcernsCommand, AnalyzeConcernsHandler, ClassifyLeadershipCommand,
    ClassifyLeadershipHandler, ConcernResult, DiagnosisResult, DiagnosisStats,
    GetDiagnosisHandler, GetDiagnosisQuery, GetDiagnosisStatsHandler, GetDiagnosisStatsQuery,
    GetLeadershipTypeHandler, GetLeadershipTypeQuery, GetSolutionHandler, GetSolutionQuery,
    LeadershipResult, ListConcernsHandler, ListConcernsQuery, ListQuestionsHandler,
    ListQuestionsQuery, SubmitDiagnosisCommand, SubmitDiagnosisHandler,
};
