//! Diagnosis rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::concern::DEFAULT_MAX_SELECTED_CONCERNS;

/// Upper bound for the selection limit: the size of the reference catalog.
pub const SELECTION_LIMIT_CEILING: usize = 15;

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosisConfig {
    /// Concerns a respondent may select in one submission
    #[serde(default = "default_max_selected_concerns")]
    pub max_selected_concerns: usize,
}

impl DiagnosisConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=SELECTION_LIMIT_CEILING).contains(&self.max_selected_concerns) {
            return Err(ValidationError::InvalidSelectionLimit {
                max: SELECTION_LIMIT_CEILING,
                actual: self.max_selected_concerns,
            });
        }
        Ok(())
    }
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self {
            max_selected_concerns: default_max_selected_concerns(),
        }
    }
}

fn default_max_selected_concerns() -> usize {
    DEFAULT_MAX_SELECTED_CONCERNS
}
