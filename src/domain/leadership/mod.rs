//! Leadership module - classification of questionnaire answers into one of
//! eight leadership types, plus the content describing each type.

mod classifier;
mod profile;
mod type_code;

pub use classifier::{DimensionLevels, DimensionScores, LeadershipClassifier, HIGH_THRESHOLD};
pub use profile::LeadershipTypeProfile;
pub use type_code::LeadershipTypeCode;
