//! Axum route handlers for the Profile API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::profiles::models::UserProfile;
use crate::profiles::PROFILE_NOT_FOUND;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SetProfileResponse {
    pub message: String,
    pub user_id: String,
}

/// POST /user_profile
///
/// Sets or replaces the communication profile for a user.
pub async fn handle_set_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<SetProfileResponse>, AppError> {
    let user_id = state.profiles.set(profile).await;
    debug!(
        "Stored profile for user {user_id} ({} profiles in store)",
        state.profiles.len().await
    );

    Ok(Json(SetProfileResponse {
        message: "User profile updated successfully".to_string(),
        user_id,
    }))
}

/// GET /user_profile/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    state
        .profiles
        .get(&user_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(PROFILE_NOT_FOUND.to_string()))
}
