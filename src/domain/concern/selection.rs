//! Bounded, toggle-based concern selection as collected by the wizard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConcernId, DomainError, ErrorCode};

/// Default number of concerns a respondent may pick.
pub const DEFAULT_MAX_SELECTED_CONCERNS: usize = 3;

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
}

/// Ordered selection of distinct concern ids with an upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcernSelection {
    ids: Vec<ConcernId>,
    max: usize,
}

impl ConcernSelection {
    pub fn new(max: usize) -> Self {
        Self { ids: Vec::new(), max }
    }

    /// Builds a selection by toggling each id in order.
    ///
    /// An id that appears twice ends up deselected, as it would in the wizard.
    pub fn from_ids<I>(ids: I, max: usize) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = ConcernId>,
    {
        let mut selection = Self::new(max);
        for id in ids {
            selection.toggle(id)?;
        }
        Ok(selection)
    }

    /// Selects an id, or deselects it if already selected.
    ///
    /// # Errors
    /// `SelectionLimitReached` when selecting a new id would exceed the bound.
    pub fn toggle(&mut self, id: ConcernId) -> Result<ToggleOutcome, DomainError> {
        if let Some(position) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(position);
            return Ok(ToggleOutcome::Deselected);
        }
        if self.ids.len() >= self.max {
            return Err(DomainError::new(
                ErrorCode::SelectionLimitReached,
                format!("At most {} concerns can be selected", self.max),
            )
            .with_detail("concern_id", id.as_str()));
        }
        self.ids.push(id);
        Ok(ToggleOutcome::Selected)
    }

    pub fn contains(&self, id: &ConcernId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ConcernId] {
        &self.ids
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.max
    }
}

impl Default for ConcernSelection {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SELECTED_CONCERNS)
    }
}
