use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rtutor::application::ports::{SpeechError, SpeechSynthesizer};
use rtutor::domain::VoiceParams;
use rtutor::infrastructure::llm::RequestPacer;
use rtutor::infrastructure::tts::{GenericSpeechClient, OpenAiSpeechClient};

fn pacer() -> Arc<RequestPacer> {
    Arc::new(RequestPacer::new(Duration::ZERO))
}

#[tokio::test]
async fn given_openai_family_provider_when_synthesizing_then_posts_speech_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/speech"))
        .and(body_partial_json(serde_json::json!({
            "model": "tts-1",
            "input": "Hello there.",
            "voice": "alloy",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiSpeechClient::new(
        "openai".to_string(),
        server.uri(),
        "sk-test".to_string(),
        "tts-1".to_string(),
        pacer(),
    );

    let bytes = client
        .synthesize("Hello there.", &VoiceParams::default())
        .await
        .expect("synthesis succeeds");
    assert_eq!(bytes, vec![1, 2, 3]);
}

#[tokio::test]
async fn given_generic_family_provider_when_synthesizing_then_posts_generation_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/generations"))
        .and(body_partial_json(serde_json::json!({
            "model": "speech-2",
            "text": "Hello there.",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8, 7]))
        .expect(1)
        .mount(&server)
        .await;

    let client = GenericSpeechClient::new(
        "sayna".to_string(),
        server.uri(),
        "key".to_string(),
        "speech-2".to_string(),
        pacer(),
    );

    let bytes = client
        .synthesize("Hello there.", &VoiceParams::default())
        .await
        .expect("synthesis succeeds");
    assert_eq!(bytes, vec![7, 7]);
}

#[tokio::test]
async fn given_rate_limit_response_when_synthesizing_then_rate_limited_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/speech"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = OpenAiSpeechClient::new(
        "openai".to_string(),
        server.uri(),
        "sk-test".to_string(),
        "tts-1".to_string(),
        pacer(),
    );

    let err = client
        .synthesize("Hello there.", &VoiceParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SpeechError::RateLimited));
}

#[tokio::test]
async fn given_empty_audio_body_when_synthesizing_then_empty_payload_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/speech"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(Vec::<u8>::new()))
        .mount(&server)
        .await;

    let client = OpenAiSpeechClient::new(
        "openai".to_string(),
        server.uri(),
        "sk-test".to_string(),
        "tts-1".to_string(),
        pacer(),
    );

    let err = client
        .synthesize("Hello there.", &VoiceParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SpeechError::EmptyPayload));
}
