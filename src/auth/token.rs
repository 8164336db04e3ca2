use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Claims encoded within an issued JWT.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the user's id.
    pub sub: Uuid,
    /// Display name of the user at issuance time.
    pub name: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies signed, time-bound identity assertions.
///
/// Tokens are self-contained HS256 JWTs: any instance configured with the
/// same secret can verify a token issued by any other, with no shared
/// session state. The flip side is that a token cannot be revoked before it
/// expires.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        }
    }

    /// Signs a token binding the user's id and name, expiring after the
    /// configured lifetime.
    pub fn issue(&self, user_id: Uuid, name: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now();
        let expires_at = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AppError::Internal("token expiry out of range".into()))?;

        let claims = Claims {
            sub: user_id,
            name: name.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token's signature, structure, and expiry, returning its
    /// claims. Nothing in an unverified token is ever trusted.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AppError::InvalidToken(format!("Invalid token: {}", e)))
    }
}
