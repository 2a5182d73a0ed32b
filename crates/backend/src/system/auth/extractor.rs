use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
};
use contracts::system::auth::TokenClaims;
use std::convert::Infallible;

use super::access::Access;
use crate::state::AppState;

/// `Authorization: Bearer <token>` value, if present
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Claims of an authenticated session; rejects anonymous callers with 401
pub struct CurrentSession(pub TokenClaims);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        claims_of(parts, state)
            .map(CurrentSession)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// Write privilege of the caller; never rejects, anonymous callers are read-only
pub struct CurrentAccess(pub Access);

#[async_trait]
impl FromRequestParts<AppState> for CurrentAccess {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let is_admin = claims_of(parts, state).is_some_and(|c| c.is_admin);
        Ok(CurrentAccess(Access::from_admin_flag(is_admin)))
    }
}

/// Claims set by the middleware, or decoded from the header on public routes
fn claims_of(parts: &Parts, state: &AppState) -> Option<TokenClaims> {
    if let Some(claims) = parts.extensions.get::<TokenClaims>() {
        return Some(claims.clone());
    }
    let token = bearer_token(&parts.headers)?;
    state.gate.validate_token(token).ok()
}
