use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AudioArtifact, Tutorial};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct TutorialResponse {
    pub id: String,
    pub topic: String,
    pub expertise: String,
    pub duration_minutes: u32,
    pub content: String,
    pub concepts: Vec<String>,
    pub packages: Vec<String>,
    pub objectives: Vec<String>,
    pub topic_category: String,
    pub source: String,
    pub word_count: usize,
    pub estimated_difficulty: u8,
    pub estimated_reading_minutes: u32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioBlock>,
}

/// Artifact metadata returned alongside a tutorial. The bytes themselves are
/// served by the audio endpoint and the artifact store.
#[derive(Serialize)]
pub struct AudioBlock {
    pub format: String,
    pub mime_type: String,
    pub source: String,
    pub duration_estimate_seconds: f32,
    pub size_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_path: Option<String>,
}

impl TutorialResponse {
    pub fn from_tutorial(tutorial: Tutorial, audio: Option<AudioBlock>) -> Self {
        Self {
            id: tutorial.id.to_string(),
            topic: tutorial.topic,
            expertise: tutorial.expertise.as_str().to_string(),
            duration_minutes: tutorial.duration_minutes,
            content: tutorial.content,
            concepts: tutorial.concepts,
            packages: tutorial.packages.into_iter().collect(),
            objectives: tutorial.objectives,
            topic_category: tutorial.topic_category,
            source: tutorial.source.as_str().to_string(),
            word_count: tutorial.metrics.word_count,
            estimated_difficulty: tutorial.metrics.estimated_difficulty,
            estimated_reading_minutes: tutorial.metrics.estimated_reading_minutes,
            created_at: tutorial.created_at,
            audio,
        }
    }
}

impl AudioBlock {
    pub fn from_artifact(artifact: &AudioArtifact) -> Self {
        Self {
            format: artifact.format.as_str().to_string(),
            mime_type: artifact.format.as_mime().to_string(),
            source: artifact.source.as_str().to_string(),
            duration_estimate_seconds: artifact.duration_estimate_seconds,
            size_bytes: artifact.bytes.len(),
            stored_path: artifact.stored_path.clone(),
        }
    }
}
