use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::domain::{Expertise, TutorialRequest, VoiceParams};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::types::{AudioBlock, ErrorResponse, TutorialResponse};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateTutorialRequest {
    pub topic: String,
    pub expertise: String,
    pub duration_minutes: u32,
    pub preferences: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub generate_audio: bool,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_tutorial_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateTutorialRequest>,
) -> impl IntoResponse {
    tracing::debug!(
        topic = %sanitize_prompt(&request.topic),
        expertise = %request.expertise,
        "Processing tutorial request"
    );

    let expertise = match Expertise::try_from(request.expertise.as_str()) {
        Ok(expertise) => expertise,
        Err(reason) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse { error: reason }),
            )
                .into_response();
        }
    };

    let tutorial_request = match TutorialRequest::new(
        &request.topic,
        expertise,
        request.duration_minutes,
        request.preferences,
    ) {
        Ok(tutorial_request) => tutorial_request,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let tutorial = state.generation_service.generate(&tutorial_request).await;

    if let Err(e) = state.tutorial_repository.save(&tutorial).await {
        tracing::error!(error = %e, "Could not persist tutorial");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save tutorial".to_string(),
            }),
        )
            .into_response();
    }

    let audio = if request.generate_audio {
        let artifact = state
            .audio_service
            .synthesize(&tutorial.content, &VoiceParams::default())
            .await;
        Some(AudioBlock::from_artifact(&artifact))
    } else {
        None
    };

    tracing::info!(
        tutorial_id = %tutorial.id,
        source = tutorial.source.as_str(),
        "Tutorial generated"
    );

    (
        StatusCode::OK,
        Json(TutorialResponse::from_tutorial(tutorial, audio)),
    )
        .into_response()
}
