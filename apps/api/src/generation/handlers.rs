//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::generate_options;
use crate::generation::models::{GenerateResponseBody, GenerateResponseRequest};
use crate::state::AppState;

/// POST /generate_responses
///
/// Drafts tone-labeled reply options for an incoming message, personalized
/// by the caller's stored profile.
pub async fn handle_generate_responses(
    State(state): State<AppState>,
    Json(request): Json<GenerateResponseRequest>,
) -> Result<Json<GenerateResponseBody>, AppError> {
    let options = generate_options(&state.profiles, state.llm.as_ref(), &request).await?;

    Ok(Json(GenerateResponseBody { options }))
}
