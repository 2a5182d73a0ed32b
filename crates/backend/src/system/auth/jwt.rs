use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use contracts::system::auth::{LoginResponse, TokenClaims};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

/// Shared-secret gate of engineer mode.
///
/// The signing key lives only in memory: tokens issued before a restart stop
/// validating, so the admin flag is never persisted.
pub struct AdminGate {
    admin_secret: String,
    signing_key: String,
    token_lifetime: chrono::Duration,
}

impl AdminGate {
    pub fn new(admin_secret: impl Into<String>, token_lifetime_hours: i64) -> Self {
        Self {
            admin_secret: admin_secret.into(),
            signing_key: generate_signing_key(),
            token_lifetime: chrono::Duration::hours(token_lifetime_hours),
        }
    }

    /// Plain equality check, no hashing
    pub fn check_secret(&self, submitted: &str) -> bool {
        !self.admin_secret.is_empty() && submitted == self.admin_secret
    }

    /// A wrong secret yields a read-only response, not an error
    pub fn login(&self, submitted: &str) -> Result<LoginResponse> {
        if !self.check_secret(submitted) {
            tracing::warn!("Engineer login refused: wrong secret");
            return Ok(LoginResponse::read_only());
        }

        let session_id = uuid::Uuid::new_v4();
        let (token, expires_at) = self.generate_access_token(&session_id.to_string())?;
        tracing::info!("Engineer mode enabled for session {}", session_id);

        Ok(LoginResponse {
            is_admin: true,
            access_token: Some(token),
            expires_at: Some(expires_at),
        })
    }

    /// Generate JWT access token for an engineer session
    pub fn generate_access_token(&self, session_id: &str) -> Result<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let expires_at = now + self.token_lifetime;

        let claims = TokenClaims {
            sub: session_id.to_string(),
            is_admin: true,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.signing_key.as_bytes()),
        )
        .context("Failed to encode JWT token")?;

        Ok((token, expires_at))
    }

    /// Validate JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.signing_key.as_bytes()),
            &Validation::default(),
        )
        .context("Failed to decode JWT token")?;

        Ok(token_data.claims)
    }
}

/// Random 256-bit signing key, base64-encoded
fn generate_signing_key() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}
