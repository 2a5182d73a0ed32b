use serde::{Deserialize, Serialize};

/// Body of `POST /api/system/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub secret: String,
}

/// A wrong secret is not an error: the caller stays in read-only mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub is_admin: bool,
    pub access_token: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl LoginResponse {
    pub fn read_only() -> Self {
        Self {
            is_admin: false,
            access_token: None,
            expires_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: uuid::Uuid,
    pub is_admin: bool,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // session id
    pub is_admin: bool,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}
