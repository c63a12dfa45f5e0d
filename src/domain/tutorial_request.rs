use std::collections::BTreeMap;

use super::Expertise;

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 60;

const MIN_TOPIC_CHARS: usize = 2;
const MAX_TOPIC_CHARS: usize = 300;

/// Markup fragments that are never legitimate in a tutorial topic.
const REJECTED_TOPIC_PATTERNS: &[&str] = &["<script", "javascript:"];

/// A validated request for tutorial generation.
///
/// Construction is the validation boundary: once a `TutorialRequest` exists,
/// the generation pipeline treats its fields as invariants and performs no
/// further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialRequest {
    topic: String,
    expertise: Expertise,
    duration_minutes: u32,
    preferences: Option<BTreeMap<String, String>>,
}

impl TutorialRequest {
    pub fn new(
        topic: &str,
        expertise: Expertise,
        duration_minutes: u32,
        preferences: Option<BTreeMap<String, String>>,
    ) -> Result<Self, RequestValidationError> {
        let topic = topic.trim().to_string();

        if topic.chars().count() < MIN_TOPIC_CHARS {
            return Err(RequestValidationError::TopicTooShort);
        }
        if topic.chars().count() > MAX_TOPIC_CHARS {
            return Err(RequestValidationError::TopicTooLong);
        }

        let topic_lower = topic.to_lowercase();
        if REJECTED_TOPIC_PATTERNS
            .iter()
            .any(|p| topic_lower.contains(p))
        {
            return Err(RequestValidationError::TopicContainsMarkup);
        }

        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
            return Err(RequestValidationError::DurationOutOfRange(duration_minutes));
        }

        Ok(Self {
            topic,
            expertise,
            duration_minutes,
            preferences,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn expertise(&self) -> Expertise {
        self.expertise
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn preferences(&self) -> Option<&BTreeMap<String, String>> {
        self.preferences.as_ref()
    }

    pub fn preference(&self, key: &str) -> Option<&str> {
        self.preferences
            .as_ref()
            .and_then(|p| p.get(key))
            .map(String::as_str)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RequestValidationError {
    #[error("topic must be at least {MIN_TOPIC_CHARS} characters long")]
    TopicTooShort,
    #[error("topic must be less than {MAX_TOPIC_CHARS} characters")]
    TopicTooLong,
    #[error("topic contains invalid characters")]
    TopicContainsMarkup,
    #[error(
        "duration must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES} minutes, got {0}"
    )]
    DurationOutOfRange(u32),
}
