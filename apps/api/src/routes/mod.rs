pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::errors::AppError;
use crate::guidance::handlers as guidance;
use crate::registry::handlers as registry;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Guidance API (public)
        .route("/api/v1/streams", get(guidance::handle_list_streams))
        .route("/api/v1/guidance/tenth", post(guidance::handle_tenth))
        .route("/api/v1/guidance/twelfth", post(guidance::handle_twelfth))
        // Institutions & sessions
        .route(
            "/api/v1/institutions/register",
            post(registry::handle_register_institution),
        )
        .route(
            "/api/v1/institutions",
            get(registry::handle_list_institutions),
        )
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/me", get(auth::handle_me))
        // Students (session-gated)
        .route(
            "/api/v1/students",
            get(registry::handle_list_students).post(registry::handle_register_student),
        )
        .fallback(not_found)
        .with_state(state)
}
