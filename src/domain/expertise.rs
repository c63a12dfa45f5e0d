use std::fmt;

use serde::{Deserialize, Serialize};

/// Target audience level for a generated tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expertise {
    Beginner,
    Intermediate,
    Expert,
}

impl Expertise {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expertise::Beginner => "beginner",
            Expertise::Intermediate => "intermediate",
            Expertise::Expert => "expert",
        }
    }

    /// Baseline difficulty score on the 1-10 scale used in tutorial metrics.
    pub fn base_difficulty(&self) -> u8 {
        match self {
            Expertise::Beginner => 3,
            Expertise::Intermediate => 6,
            Expertise::Expert => 9,
        }
    }
}

impl TryFrom<&str> for Expertise {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "expert" => Ok(Self::Expert),
            other => Err(format!(
                "Invalid expertise: {}. Expected: beginner, intermediate, or expert",
                other
            )),
        }
    }
}

impl fmt::Display for Expertise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
