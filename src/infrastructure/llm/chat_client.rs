use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TextGenerator, TextGeneratorError};
use crate::infrastructure::observability::sanitize_prompt;

use super::RequestPacer;

pub const SYSTEM_INSTRUCTION: &str = "You are an expert R programming instructor with 15+ years \
of experience teaching data science, statistics, and R programming. You specialize in creating \
audio-friendly tutorials that will be converted to speech. Write in a conversational, engaging \
tone as if you are speaking directly to a student, and include working R code examples with \
clear verbal explanations of what each part does.";

const MAX_TOKENS: usize = 4096;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct ChatClientConfig {
    /// Identifier recorded in `ContentSource::Provider` (e.g. "deepseek").
    pub provider_id: String,
    /// API root, e.g. "https://api.deepseek.com/v1".
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// Chat-completions client for OpenAI-style providers.
///
/// One configured instance per provider; the same implementation serves
/// DeepSeek, OpenAI, and OpenRouter since they share the wire contract.
pub struct ChatCompletionClient {
    client: Client,
    config: ChatClientConfig,
    pacer: Arc<RequestPacer>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl ChatCompletionClient {
    pub fn new(config: ChatClientConfig, pacer: Arc<RequestPacer>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            config,
            pacer,
        }
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionClient {
    fn id(&self) -> &str {
        &self.config.provider_id
    }

    async fn generate(&self, prompt: &str) -> Result<String, TextGeneratorError> {
        if self.config.api_key.is_empty() {
            return Err(TextGeneratorError::NotConfigured(
                self.config.provider_id.clone(),
            ));
        }

        self.pacer.pace().await;

        let request_body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        tracing::debug!(
            provider = %self.config.provider_id,
            model = %self.config.model,
            prompt = %sanitize_prompt(prompt),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TextGeneratorError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TextGeneratorError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TextGeneratorError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TextGeneratorError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TextGeneratorError::InvalidResponse("empty choices".to_string()))?;

        if content.trim().is_empty() {
            return Err(TextGeneratorError::InvalidResponse(
                "blank completion".to_string(),
            ));
        }

        tracing::info!(
            provider = %self.config.provider_id,
            chars = content.len(),
            "Chat completion received"
        );

        Ok(content)
    }
}
