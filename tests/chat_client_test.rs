use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rtutor::application::ports::{TextGenerator, TextGeneratorError};
use rtutor::infrastructure::llm::{ChatClientConfig, ChatCompletionClient, RequestPacer};

fn client_for(server: &MockServer, api_key: &str) -> ChatCompletionClient {
    ChatCompletionClient::new(
        ChatClientConfig {
            provider_id: "deepseek".to_string(),
            base_url: server.uri(),
            api_key: api_key.to_string(),
            model: "deepseek-chat".to_string(),
        },
        Arc::new(RequestPacer::new(Duration::ZERO)),
    )
}

#[tokio::test]
async fn given_successful_completion_when_generating_then_content_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(bearer_token("sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "# Vectors in R\n\nBody."}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let content = client_for(&server, "sk-test")
        .generate("Explain vectors")
        .await
        .expect("completion succeeds");
    assert!(content.contains("Vectors in R"));
}

#[tokio::test]
async fn given_rate_limit_response_when_generating_then_rate_limited_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server, "sk-test")
        .generate("Explain vectors")
        .await
        .unwrap_err();
    assert!(matches!(err, TextGeneratorError::RateLimited));
}

#[tokio::test]
async fn given_server_error_when_generating_then_request_failed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client_for(&server, "sk-test")
        .generate("Explain vectors")
        .await
        .unwrap_err();
    assert!(matches!(err, TextGeneratorError::RequestFailed(_)));
}

#[tokio::test]
async fn given_malformed_body_when_generating_then_invalid_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = client_for(&server, "sk-test")
        .generate("Explain vectors")
        .await
        .unwrap_err();
    assert!(matches!(err, TextGeneratorError::InvalidResponse(_)));
}

#[tokio::test]
async fn given_empty_choices_when_generating_then_invalid_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server, "sk-test")
        .generate("Explain vectors")
        .await
        .unwrap_err();
    assert!(matches!(err, TextGeneratorError::InvalidResponse(_)));
}

#[tokio::test]
async fn given_missing_api_key_when_generating_then_not_configured_without_any_request() {
    let server = MockServer::start().await;

    let err = client_for(&server, "")
        .generate("Explain vectors")
        .await
        .unwrap_err();
    assert!(matches!(err, TextGeneratorError::NotConfigured(_)));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
