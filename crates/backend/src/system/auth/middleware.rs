use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Middleware that requires an engineer token
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = super::extractor::bearer_token(req.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = state
        .gate
        .validate_token(token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    if !claims.is_admin {
        tracing::warn!("Mutation refused for non-admin session {}", claims.sub);
        return Err(StatusCode::FORBIDDEN);
    }

    // Claims are read back by CurrentSession / CurrentAccess
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
