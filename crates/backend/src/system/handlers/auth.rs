use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use contracts::system::auth::{LoginRequest, LoginResponse, SessionInfo};

use crate::state::AppState;
use crate::system::auth::extractor::CurrentSession;

/// POST /api/system/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let response = state.gate.login(&request.secret).map_err(|e| {
        tracing::error!("Failed to issue engineer token: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(response))
}

/// GET /api/system/auth/me
pub async fn current_user(
    CurrentSession(claims): CurrentSession,
) -> Result<Json<SessionInfo>, StatusCode> {
    let session_id = uuid::Uuid::parse_str(&claims.sub).map_err(|_| StatusCode::UNAUTHORIZED)?;
    let expires_at = chrono::DateTime::<chrono::Utc>::from_timestamp(claims.exp as i64, 0)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(Json(SessionInfo {
        session_id,
        is_admin: claims.is_admin,
        expires_at,
    }))
}
