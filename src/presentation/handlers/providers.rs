use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProvidersResponse {
    /// Text provider ids in fallback priority order.
    pub text_providers: Vec<String>,
    /// Speech provider ids in fallback priority order.
    pub speech_providers: Vec<String>,
    pub speech_engine_available: bool,
    pub codec_available: bool,
}

pub async fn providers_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ProvidersResponse {
            text_providers: state.generation_service.provider_ids(),
            speech_providers: state.audio_service.synthesizer_ids(),
            speech_engine_available: state.speech_engine_available,
            codec_available: state.codec_available,
        }),
    )
}
