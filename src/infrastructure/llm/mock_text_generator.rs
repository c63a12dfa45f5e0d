use async_trait::async_trait;

use crate::application::ports::{TextGenerator, TextGeneratorError};

/// Test double with a scripted outcome.
pub struct MockTextGenerator {
    id: String,
    response: Result<String, String>,
}

impl MockTextGenerator {
    pub fn succeeding(id: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            response: Ok(content.to_string()),
        }
    }

    pub fn failing(id: &str) -> Self {
        Self {
            id: id.to_string(),
            response: Err("simulated provider failure".to_string()),
        }
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    fn id(&self) -> &str {
        &self.id
    }

    async fn generate(&self, _prompt: &str) -> Result<String, TextGeneratorError> {
        match &self.response {
            Ok(content) => Ok(content.clone()),
            Err(reason) => Err(TextGeneratorError::RequestFailed(reason.clone())),
        }
    }
}
