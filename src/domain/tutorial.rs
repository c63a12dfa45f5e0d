use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Expertise;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TutorialId(Uuid);

impl TutorialId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TutorialId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TutorialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which path produced the tutorial content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "provider")]
pub enum ContentSource {
    Provider(String),
    LocalFallback,
}

impl ContentSource {
    pub fn as_str(&self) -> &str {
        match self {
            ContentSource::Provider(id) => id.as_str(),
            ContentSource::LocalFallback => "local_fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ContentSource::LocalFallback)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub word_count: usize,
    pub char_count: usize,
    /// 1 (introductory) to 10 (expert-level).
    pub estimated_difficulty: u8,
    pub estimated_reading_minutes: u32,
}

/// A generated tutorial. Never mutated after creation; regeneration produces
/// a new `Tutorial` that replaces the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: TutorialId,
    pub topic: String,
    pub expertise: Expertise,
    pub duration_minutes: u32,
    pub content: String,
    pub concepts: Vec<String>,
    pub packages: BTreeSet<String>,
    pub objectives: Vec<String>,
    pub topic_category: String,
    pub source: ContentSource,
    pub metrics: ContentMetrics,
    pub created_at: DateTime<Utc>,
}
