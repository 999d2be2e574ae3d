//! Concern module - concern catalog, selection, and the analysis that maps a
//! selection to primary categories and a solution combination.
//!
//! # Components
//!
//! - `ConcernCatalog` - validated catalog with per-category denominators
//! - `ConcernSelection` - bounded toggle set collected by the wizard
//! - `ConcernAnalyzer` - tally, Z-scores, primaries, combination
//! - `CombinationId` - the eleven solution keys

mod analyzer;
mod catalog;
mod category;
mod combination;
mod selection;

#[cfg(test)]
pub(crate) use catalog::test_support;

pub use analyzer::{CategoryZScores, ConcernAnalysis, ConcernAnalyzer};
pub use catalog::{Concern, ConcernCatalog, MAX_CATEGORIES_PER_CONCERN};
pub use category::{CategoryCounts, ConcernCategory};
pub use combination::CombinationId;
pub use selection::{ConcernSelection, ToggleOutcome, DEFAULT_MAX_SELECTED_CONCERNS};
