use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use rtutor::application::ports::{
    ArtifactStore, SpeechSynthesizer, TextGenerator, ToolLocator, Transcoder, TutorialRepository,
};
use rtutor::application::services::{AudioService, GenerationService};
use rtutor::infrastructure::llm::{ChatClientConfig, ChatCompletionClient, RequestPacer};
use rtutor::infrastructure::observability::{TracingConfig, init_tracing};
use rtutor::infrastructure::persistence::{
    InMemoryTutorialRepository, PgTutorialRepository, create_pool,
};
use rtutor::infrastructure::storage::LocalArtifactStore;
use rtutor::infrastructure::tts::{
    EspeakEngine, FfmpegTranscoder, GenericSpeechClient, OpenAiSpeechClient, SystemToolLocator,
};
use rtutor::presentation::{AppState, ProviderFamily, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let pacer = Arc::new(RequestPacer::new(settings.min_request_interval));

    let text_providers: Vec<Arc<dyn TextGenerator>> = settings
        .text_providers
        .iter()
        .map(|p| {
            Arc::new(ChatCompletionClient::new(
                ChatClientConfig {
                    provider_id: p.id.clone(),
                    base_url: p.base_url.clone(),
                    api_key: p.api_key.clone(),
                    model: p.model.clone(),
                },
                Arc::clone(&pacer),
            )) as Arc<dyn TextGenerator>
        })
        .collect();

    let speech_providers: Vec<Arc<dyn SpeechSynthesizer>> = settings
        .speech_providers
        .iter()
        .map(|p| match p.family {
            ProviderFamily::OpenAi => Arc::new(OpenAiSpeechClient::new(
                p.id.clone(),
                p.base_url.clone(),
                p.api_key.clone(),
                p.model.clone(),
                Arc::clone(&pacer),
            )) as Arc<dyn SpeechSynthesizer>,
            ProviderFamily::Generic => Arc::new(GenericSpeechClient::new(
                p.id.clone(),
                p.base_url.clone(),
                p.api_key.clone(),
                p.model.clone(),
                Arc::clone(&pacer),
            )) as Arc<dyn SpeechSynthesizer>,
        })
        .collect();

    let locator: Arc<dyn ToolLocator> = Arc::new(SystemToolLocator);
    let engine = Arc::new(EspeakEngine::new(
        Arc::clone(&locator),
        settings.audio.speaking_rate_wpm,
    ));
    let transcoder = Arc::new(FfmpegTranscoder::new(
        Arc::clone(&locator),
        settings.audio.bitrate_kbps,
    ));
    let speech_engine_available = engine.is_available();
    let codec_available = transcoder.is_available();

    let store: Arc<dyn ArtifactStore> = Arc::new(LocalArtifactStore::new(
        settings.storage.artifact_dir.clone().into(),
    )?);

    let tutorial_repository: Arc<dyn TutorialRepository> = match &settings.database.url {
        Some(url) => {
            let pool = create_pool(url, 5).await?;
            Arc::new(PgTutorialRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, tutorials are stored in memory only");
            Arc::new(InMemoryTutorialRepository::new())
        }
    };

    let generation_service = Arc::new(GenerationService::new(text_providers));
    let audio_service = Arc::new(AudioService::new(
        speech_providers,
        engine,
        transcoder,
        store,
    ));

    tracing::info!(
        environment = %settings.environment,
        text_providers = ?generation_service.provider_ids(),
        speech_engine_available,
        codec_available,
        "Service configured"
    );

    let state = AppState {
        generation_service,
        audio_service,
        tutorial_repository,
        speech_engine_available,
        codec_available,
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
