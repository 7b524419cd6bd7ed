use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    models::{PreferenceInput, RecommendationResult},
    services::{prompt, validator, ChatMessage},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generates movie recommendations for the client's preferences
///
/// Normalizes the preferences into a prompt, calls the upstream model, and
/// validates the returned text before relaying it. Each request is isolated;
/// failures map to an `{ "error": ... }` body via `AppError`.
pub async fn recommend(
    State(state): State<AppState>,
    Json(input): Json<PreferenceInput>,
) -> AppResult<Json<RecommendationResult>> {
    let user_prompt = prompt::build_user_prompt(&input);
    let messages = [
        ChatMessage::system(prompt::SYSTEM_PROMPT),
        ChatMessage::user(user_prompt),
    ];

    let raw = state.provider.complete(&messages).await?;
    let result = validator::validate(&raw)?;

    tracing::info!(
        movies = result.movies.len(),
        provider = state.provider.name(),
        "Recommendations generated"
    );

    Ok(Json(result))
}
