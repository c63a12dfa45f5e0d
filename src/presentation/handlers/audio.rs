use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{AudioFormat, TutorialId, VoiceParams};
use crate::presentation::handlers::types::ErrorResponse;
use crate::presentation::state::AppState;

const MIN_SPEED: f32 = 0.25;
const MAX_SPEED: f32 = 4.0;

#[derive(Deserialize, Default)]
pub struct AudioRequest {
    pub voice: Option<String>,
    pub speed: Option<f32>,
    pub format: Option<String>,
}

/// Regenerates audio for a stored tutorial and responds with the raw bytes.
/// The artifact's real format is reported in the `Content-Type` header; it
/// may differ from the requested one when fallback tiers engage.
#[tracing::instrument(skip(state, request))]
pub async fn generate_audio_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AudioRequest>,
) -> impl IntoResponse {
    let defaults = VoiceParams::default();

    let format = match request.format.as_deref() {
        Some(raw) => match AudioFormat::try_from(raw) {
            Ok(format) => format,
            Err(reason) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse { error: reason }),
                )
                    .into_response();
            }
        },
        None => defaults.format,
    };

    let params = VoiceParams {
        voice: request.voice.unwrap_or(defaults.voice),
        speed: request
            .speed
            .unwrap_or(defaults.speed)
            .clamp(MIN_SPEED, MAX_SPEED),
        format,
    };

    let tutorial = match state.tutorial_repository.get(TutorialId::from_uuid(id)).await {
        Ok(Some(tutorial)) => tutorial,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Tutorial not found: {}", id),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not load tutorial for audio generation");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load tutorial".to_string(),
                }),
            )
                .into_response();
        }
    };

    let artifact = state.audio_service.synthesize(&tutorial.content, &params).await;

    tracing::info!(
        tutorial_id = %id,
        source = artifact.source.as_str(),
        format = artifact.format.as_str(),
        bytes = artifact.bytes.len(),
        "Audio generated"
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, artifact.format.as_mime().to_string()),
            (
                HeaderName::from_static("x-audio-source"),
                artifact.source.as_str().to_string(),
            ),
        ],
        artifact.bytes,
    )
        .into_response()
}
