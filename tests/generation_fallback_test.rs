use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rtutor::application::ports::TextGenerator;
use rtutor::application::services::GenerationService;
use rtutor::domain::{ContentSource, Expertise, TutorialRequest};
use rtutor::infrastructure::llm::{ChatClientConfig, ChatCompletionClient, RequestPacer};

fn failing_client(server: &MockServer, id: &str, pacer: Arc<RequestPacer>) -> Arc<dyn TextGenerator> {
    Arc::new(ChatCompletionClient::new(
        ChatClientConfig {
            provider_id: id.to_string(),
            base_url: server.uri(),
            api_key: "sk-test".to_string(),
            model: "test-model".to_string(),
        },
        pacer,
    ))
}

#[tokio::test]
async fn given_every_provider_erroring_when_generating_then_local_fallback_tutorial_served() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let pacer = Arc::new(RequestPacer::new(Duration::ZERO));
    let service = GenerationService::new(vec![
        failing_client(&server, "deepseek", Arc::clone(&pacer)),
        failing_client(&server, "openai", Arc::clone(&pacer)),
        failing_client(&server, "openrouter", Arc::clone(&pacer)),
    ]);

    let request = TutorialRequest::new("Data Structures", Expertise::Beginner, 5, None)
        .expect("valid request");
    let tutorial = service.generate(&request).await;

    assert_eq!(tutorial.source, ContentSource::LocalFallback);
    assert!(tutorial.content.contains("Data Structures"));
    assert!(!tutorial.objectives.is_empty());
    assert!(tutorial.metrics.word_count > 0);

    // All three providers were actually attempted before falling back.
    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn given_later_provider_succeeding_when_generating_then_chain_stops_there() {
    let failing = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&failing)
        .await;

    let succeeding = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"content": "# Factors in R\n\nlibrary(dplyr)\n"}}]
        })))
        .expect(1)
        .mount(&succeeding)
        .await;

    let pacer = Arc::new(RequestPacer::new(Duration::ZERO));
    let service = GenerationService::new(vec![
        failing_client(&failing, "deepseek", Arc::clone(&pacer)),
        failing_client(&succeeding, "openai", Arc::clone(&pacer)),
    ]);

    let request = TutorialRequest::new("Factors", Expertise::Intermediate, 10, None)
        .expect("valid request");
    let tutorial = service.generate(&request).await;

    assert_eq!(tutorial.source, ContentSource::Provider("openai".to_string()));
    assert!(tutorial.packages.contains("dplyr"));
}
