use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::domain::TutorialId;
use crate::presentation::handlers::types::{ErrorResponse, TutorialResponse};
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn fetch_tutorial_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.tutorial_repository.get(TutorialId::from_uuid(id)).await {
        Ok(Some(tutorial)) => (
            StatusCode::OK,
            Json(TutorialResponse::from_tutorial(tutorial, None)),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Tutorial not found: {}", id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Could not load tutorial");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load tutorial".to_string(),
                }),
            )
                .into_response()
        }
    }
}
