use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{SpeechError, SpeechSynthesizer};
use crate::domain::{AudioFormat, VoiceParams};
use crate::infrastructure::llm::RequestPacer;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Remote TTS client for the OpenAI speech API family
/// (`POST {base_url}/audio/speech`, raw audio bytes on success).
pub struct OpenAiSpeechClient {
    client: Client,
    provider_id: String,
    base_url: String,
    api_key: String,
    model: String,
    pacer: Arc<RequestPacer>,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
    speed: f32,
}

impl OpenAiSpeechClient {
    pub fn new(
        provider_id: String,
        base_url: String,
        api_key: String,
        model: String,
        pacer: Arc<RequestPacer>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            provider_id,
            base_url,
            api_key,
            model,
            pacer,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechClient {
    fn id(&self) -> &str {
        &self.provider_id
    }

    fn output_format(&self, params: &VoiceParams) -> AudioFormat {
        params.format
    }

    async fn synthesize(&self, text: &str, params: &VoiceParams) -> Result<Vec<u8>, SpeechError> {
        if self.api_key.is_empty() {
            return Err(SpeechError::NotConfigured(self.provider_id.clone()));
        }

        self.pacer.pace().await;

        let body = SpeechRequest {
            model: &self.model,
            input: text,
            voice: &params.voice,
            response_format: params.format.as_str(),
            speed: params.speed,
        };

        let response = self
            .client
            .post(format!("{}/audio/speech", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Accept", params.format.as_mime())
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::RequestFailed(e.to_string()))?;

        if bytes.is_empty() {
            return Err(SpeechError::EmptyPayload);
        }

        tracing::info!(
            provider = %self.provider_id,
            bytes = bytes.len(),
            format = %params.format.as_str(),
            "Remote speech synthesis completed"
        );

        Ok(bytes.to_vec())
    }
}
