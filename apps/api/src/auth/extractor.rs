use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::auth::sessions::Session;
use crate::errors::AppError;
use crate::state::AppState;

/// The institution behind an `Authorization: Bearer <token>` header.
/// Handlers taking this argument are only reachable with a live session.
#[derive(Debug, Clone)]
pub struct AuthenticatedInstitution {
    pub token: Uuid,
    pub session: Session,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedInstitution {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Please log in first".to_string()))?;

        let session = state.sessions.get(token).ok_or_else(|| {
            AppError::Unauthorized("Session expired, please log in again".to_string())
        })?;

        Ok(Self { token, session })
    }
}

fn bearer_token(parts: &Parts) -> Option<Uuid> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}
