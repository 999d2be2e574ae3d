//! Questionnaire dimensions used for leadership classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the three axes every question is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Growth,
    Sharing,
    Interaction,
}

impl Dimension {
    /// All dimensions in display order.
    pub const ALL: [Dimension; 3] = [Dimension::Growth, Dimension::Sharing, Dimension::Interaction];

    /// Returns the wire name of this dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Growth => "growth",
            Dimension::Sharing => "sharing",
            Dimension::Interaction => "interaction",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Growth => "Growth",
            Dimension::Sharing => "Sharing",
            Dimension::Interaction => "Interaction",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "growth" => Ok(Dimension::Growth),
            "sharing" => Ok(Dimension::Sharing),
            "interaction" => Ok(Dimension::Interaction),
            other => Err(ValidationError::invalid_format(
                "dimension",
                format!("unknown dimension '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_parses_case_insensitively() {
        assert_eq!("Growth".parse::<Dimension>().unwrap(), Dimension::Growth);
        assert_eq!(" sharing ".parse::<Dimension>().unwrap(), Dimension::Sharing);
        assert!("vision".parse::<Dimension>().is_err());
    }

    #[test]
    fn dimension_serializes_lowercase() {
        let json = serde_json::to_string(&Dimension::Interaction).unwrap();
        assert_eq!(json, "\"interaction\"");
    }
}
