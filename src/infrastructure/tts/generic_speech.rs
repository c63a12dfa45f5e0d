use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{SpeechError, SpeechSynthesizer};
use crate::domain::{AudioFormat, VoiceParams};
use crate::infrastructure::llm::RequestPacer;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Remote TTS client for providers using the generic audio-generation shape
/// (`POST {base_url}/audio/generations` with `text`/`format` fields).
pub struct GenericSpeechClient {
    client: Client,
    provider_id: String,
    base_url: String,
    api_key: String,
    model: String,
    pacer: Arc<RequestPacer>,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    text: &'a str,
    voice: &'a str,
    format: &'a str,
    speed: f32,
}

impl GenericSpeechClient {
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
impl SpeechSynthesizer for GenericSpeechClient {
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

        let body = GenerationRequest {
            model: &self.model,
            text,
            voice: &params.voice,
            format: params.format.as_str(),
            speed: params.speed,
        };

        let response = self
            .client
            .post(format!("{}/audio/generations", self.base_url))
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

        Ok(bytes.to_vec())
    }
}
