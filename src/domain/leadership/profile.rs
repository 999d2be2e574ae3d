//! Descriptive content attached to each leadership type.

use serde::{Deserialize, Serialize};

use super::LeadershipTypeCode;

/// Static content shown on the results page for a leadership type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadershipTypeProfile {
    pub code: LeadershipTypeCode,
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub growth_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
