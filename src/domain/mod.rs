//! Domain layer containing scoring rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, Likert score, errors)
//! - `questionnaire` - Questions, dimensions, and answer sets
//! - `leadership` - Dimension scoring and leadership type classification
//! - `concern` - Concern catalog, selection, and combination analysis
//! - `content` - Result content and the embedded reference data set
//! - `diagnosis` - A completed diagnosis record

pub mod concern;
pub mod content;
pub mod diagnosis;
pub mod foundation;
pub mod leadership;
pub mod questionnaire;
