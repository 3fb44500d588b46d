//! Token service - issues and verifies bearer tokens.
//!
//! Issuance signs whatever claims object the caller supplies; there is
//! no credential check. This mirrors the deployed behavior and is a
//! known weak point of the API surface.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{Config, TOKEN_EXPIRATION_HOURS};
use crate::errors::AppResult;

/// Claims the application reads back out of a verified token.
///
/// Tokens may carry arbitrary extra fields; only the email claim (used
/// for booking authorization) and the expiry are deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub email: Option<String>,
    pub exp: i64,
}

/// Token response returned by the issuance endpoint.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Token service trait for dependency injection.
pub trait TokenService: Send + Sync {
    /// Sign an arbitrary claims object into a bearer token.
    fn issue(&self, claims: Map<String, Value>) -> AppResult<TokenResponse>;

    /// Verify a bearer token and extract its claims.
    fn verify(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation backed by HS256 JWTs.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    /// Create a token service from the application configuration.
    pub fn new(config: &Config) -> Self {
        Self::from_secret(config.jwt_secret_bytes())
    }

    /// Create a token service from a raw shared secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, mut claims: Map<String, Value>) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(TOKEN_EXPIRATION_HOURS);

        claims.insert("iat".to_string(), Value::from(now.timestamp()));
        claims.insert("exp".to_string(), Value::from(expires_at.timestamp()));

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(TokenResponse { token })
    }

    fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;

        Ok(token_data.claims)
    }
}
