//! Reference content shipped with the service.
//!
//! The YAML document is embedded at build time and parsed once on first use.
//! It is the default content source; a database-backed source can replace it
//! without touching the classifier or the analyzer.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use super::Solution;
use crate::domain::concern::{CombinationId, Concern, ConcernCatalog};
use crate::domain::foundation::ValidationError;
use crate::domain::leadership::{LeadershipTypeCode, LeadershipTypeProfile};
use crate::domain::questionnaire::{Question, QuestionCatalog};

const REFERENCE_YAML: &str = include_str!("../../../content/reference.yaml");

/// Errors raised while turning a content document into catalogs.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to parse content document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Duplicate content for {0}")]
    Duplicate(String),

    #[error("Missing content for leadership type {0}")]
    MissingLeadershipType(LeadershipTypeCode),

    #[error("Missing solution for combination {0}")]
    MissingSolution(CombinationId),
}

#[derive(Debug, Deserialize)]
struct ContentDocument {
    questions: Vec<Question>,
    concerns: Vec<Concern>,
    leadership_types: Vec<LeadershipTypeProfile>,
    solutions: Vec<Solution>,
}

/// Complete, validated content set: both catalogs plus all result content.
#[derive(Debug, Clone)]
pub struct ReferenceContent {
    pub questions: QuestionCatalog,
    pub concerns: ConcernCatalog,
    pub leadership_types: HashMap<LeadershipTypeCode, LeadershipTypeProfile>,
    pub solutions: HashMap<CombinationId, Solution>,
}

impl ReferenceContent {
    /// Parses and validates a YAML content document.
    ///
    /// Every leadership type and every combination must have content.
    pub fn from_yaml(source: &str) -> Result<Self, ContentLoadError> {
        let document: ContentDocument = serde_yaml::from_str(source)?;
        Self::from_parts(
            document.questions,
            document.concerns,
            document.leadership_types,
            document.solutions,
        )
    }

    /// Assembles content from already-decoded rows.
    pub fn from_parts(
        questions: Vec<Question>,
        concerns: Vec<Concern>,
        leadership_types: Vec<LeadershipTypeProfile>,
        solutions: Vec<Solution>,
    ) -> Result<Self, ContentLoadError> {
        let questions = QuestionCatalog::new(questions)?;
        let concerns = ConcernCatalog::new(concerns)?;

        let mut profiles = HashMap::new();
        for profile in leadership_types {
            let code = profile.code;
            if profiles.insert(code, profile).is_some() {
                return Err(ContentLoadError::Duplicate(code.to_string()));
            }
        }
        if let Some(missing) = LeadershipTypeCode::ALL.into_iter().find(|c| !profiles.contains_key(c)) {
            return Err(ContentLoadError::MissingLeadershipType(missing));
        }

        let mut by_id = HashMap::new();
        for solution in solutions {
            let id = solution.id;
            if by_id.insert(id, solution).is_some() {
                return Err(ContentLoadError::Duplicate(id.to_string()));
            }
        }
        if let Some(missing) = CombinationId::ALL.into_iter().find(|id| !by_id.contains_key(id)) {
            return Err(ContentLoadError::MissingSolution(missing));
        }

        Ok(Self {
            questions,
            concerns,
            leadership_types: profiles,
            solutions: by_id,
        })
    }

    /// Content embedded in the binary.
    pub fn embedded() -> &'static ReferenceContent {
        &EMBEDDED
    }
}

static EMBEDDED: Lazy<ReferenceContent> = Lazy::new(|| {
    ReferenceContent::from_yaml(REFERENCE_YAML)
        .unwrap_or_else(|e| panic!("Embedded reference content is invalid: {}", e))
});
