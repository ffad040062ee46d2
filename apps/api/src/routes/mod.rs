pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate_responses;
use crate::profiles::handlers::{handle_get_profile, handle_set_profile};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route("/user_profile", post(handle_set_profile))
        .route("/user_profile/:user_id", get(handle_get_profile))
        // Generation API
        .route("/generate_responses", post(handle_generate_responses))
        .with_state(state)
}
