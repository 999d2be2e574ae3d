//! Pre-authored solution content keyed by combination.

use serde::{Deserialize, Serialize};

use crate::domain::concern::CombinationId;

/// One recommended action within a solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    pub method: String,
    pub effect: String,
    pub leadership_tip: String,
}

/// Solution shown for a concern combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub id: CombinationId,
    pub title: String,
    pub core_issue: String,
    #[serde(default)]
    pub field_voices: Vec<String>,
    pub diagnosis: String,
    /// Ordered; the first action is the one to start with.
    #[serde(default)]
    pub actions: Vec<ActionItem>,
}
