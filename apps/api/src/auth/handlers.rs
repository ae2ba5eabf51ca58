//! Axum route handlers for login and session management.

use anyhow::Context;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::extractor::AuthenticatedInstitution;
use crate::auth::password::verify_password;
use crate::auth::Session;
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::institution::InstitutionSummary;
use crate::models::student::emails_match;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
    pub institution: InstitutionSummary,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let institutions = state.institutions.load_all().await?;
    let candidate = institutions
        .into_iter()
        .find(|i| emails_match(&i.email, &req.email));

    let institution = match candidate {
        Some(found) => {
            let plain = req.password.clone();
            let stored = found.password.clone();
            let verified = tokio::task::spawn_blocking(move || verify_password(&plain, &stored))
                .await
                .context("Password verification task failed")?;
            verified.then_some(found)
        }
        None => None,
    };

    let Some(institution) = institution else {
        warn!("Failed login for {}", req.email.trim());
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    };

    let (token, session) = state
        .sessions
        .create(&institution.email, &institution.name);
    info!("Institution {} logged in", institution.email);

    Ok(Json(LoginResponse {
        token,
        expires_at: session.expires_at,
        institution: institution.into(),
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    auth: AuthenticatedInstitution,
) -> StatusCode {
    state.sessions.revoke(auth.token);
    info!("Institution {} logged out", auth.session.institution_email);
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/me
pub async fn handle_me(auth: AuthenticatedInstitution) -> Json<Session> {
    Json(auth.session)
}
