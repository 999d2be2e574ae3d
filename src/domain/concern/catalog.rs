//! Concern keywords and the concern catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CategoryCounts, ConcernCategory};
use crate::domain::foundation::{ConcernId, ValidationError};

/// Most categories a single concern may carry.
pub const MAX_CATEGORIES_PER_CONCERN: usize = 2;

/// A selectable concern keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concern {
    pub id: ConcernId,
    pub label: String,
    pub categories: Vec<ConcernCategory>,
    pub group_name: String,
}

/// Immutable, validated concern catalog.
///
/// Category denominators are derived once here: every catalog entry counts
/// towards each category it carries, so cross-cutting concerns count twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcernCatalog {
    concerns: Vec<Concern>,
    index: HashMap<ConcernId, usize>,
    denominators: CategoryCounts,
}

impl ConcernCatalog {
    /// Builds a catalog.
    ///
    /// # Errors
    /// - duplicate concern ids
    /// - a concern with no categories, more than two, or the same category twice
    pub fn new(concerns: Vec<Concern>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(concerns.len());
        let mut denominators = CategoryCounts::default();

        for (position, concern) in concerns.iter().enumerate() {
            let field = format!("concerns[{}].categories", concern.id);
            if concern.categories.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            if concern.categories.len() > MAX_CATEGORIES_PER_CONCERN {
                return Err(ValidationError::out_of_range(
                    field,
                    1,
                    MAX_CATEGORIES_PER_CONCERN as i32,
                    concern.categories.len() as i32,
                ));
            }
            if concern.categories.len() == 2 && concern.categories[0] == concern.categories[1] {
                return Err(ValidationError::invalid_format(field, "category listed twice"));
            }
            if index.insert(concern.id.clone(), position).is_some() {
                return Err(ValidationError::duplicate_id("concern", concern.id.as_str()));
            }
            for category in &concern.categories {
                denominators.increment(*category);
            }
        }

        Ok(Self {
            concerns,
            index,
            denominators,
        })
    }

    pub fn get(&self, id: &ConcernId) -> Option<&Concern> {
        self.index.get(id).map(|&position| &self.concerns[position])
    }

    /// Number of catalog entries tagged with each category.
    pub fn denominators(&self) -> CategoryCounts {
        self.denominators
    }

    pub fn concerns(&self) -> &[Concern] {
        &self.concerns
    }

    pub fn len(&self) -> usize {
        self.concerns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concerns.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use ConcernCategory::*;

    pub fn concern(id: &str, categories: &[ConcernCategory]) -> Concern {
        Concern {
            id: ConcernId::new(id).unwrap(),
            label: format!("Concern {}", id),
            categories: categories.to_vec(),
            group_name: "Test".to_string(),
        }
    }

    /// Same shape as the shipped catalog: E=5, G=6, C=4, L=2 across 15 entries.
    pub fn reference_shaped_catalog() -> ConcernCatalog {
        ConcernCatalog::new(vec![
            concern("E1", &[E]),
            concern("E2", &[E]),
            concern("E3", &[E]),
            concern("E4", &[E]),
            concern("G1", &[G]),
            concern("G2", &[G]),
            concern("G3", &[G]),
            concern("G4", &[G]),
            concern("G5", &[G]),
            concern("C1", &[C]),
            concern("C2", &[C]),
            concern("C3", &[C]),
            concern("L1", &[L]),
            concern("EG1", &[E, G]),
            concern("CL1", &[C, L]),
        ])
        .unwrap()
    }
}
