//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use bookhub_core::config::auth::AuthConfig;
use bookhub_core::error::AppError;
use bookhub_entity::user::UserRole;

use super::claims::{TokenClaims, TokenClass};

/// Creates signed JWT access and refresh tokens.
///
/// Every issued token carries a freshly generated `jti`, so the two halves
/// of a pair are revocable independently.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// JOSE header carrying the configured algorithm.
    header: Header,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = super::signing_algorithm(&config.jwt_algorithm)?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            header: Header::new(algorithm),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        })
    }

    /// Generates an access + refresh token pair for the given user.
    pub fn generate_token_pair(
        &self,
        user_id: Uuid,
        email: &str,
        role: UserRole,
    ) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let access_exp = now + Duration::minutes(self.access_ttl_minutes);
        let refresh_exp = now + Duration::days(self.refresh_ttl_days);

        let access_token =
            self.sign(user_id, email, role, now, access_exp, TokenClass::Access)?;
        let refresh_token =
            self.sign(user_id, email, role, now, refresh_exp, TokenClass::Refresh)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: access_exp,
            refresh_expires_at: refresh_exp,
        })
    }

    /// Generates a standalone access token (e.g., after refresh).
    pub fn generate_access_token(
        &self,
        user_id: Uuid,
        email: &str,
        role: UserRole,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.access_ttl_minutes);
        let token = self.sign(user_id, email, role, now, exp, TokenClass::Access)?;
        Ok((token, exp))
    }

    /// Signs a token with an explicit lifetime, for testing expiry handling.
    #[doc(hidden)]
    pub fn generate_with_lifetime(
        &self,
        user_id: Uuid,
        email: &str,
        role: UserRole,
        class: TokenClass,
        lifetime: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        self.sign(user_id, email, role, now, now + lifetime, class)
    }

    fn sign(
        &self,
        user_id: Uuid,
        email: &str,
        role: UserRole,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        class: TokenClass,
    ) -> Result<String, AppError> {
        let claims = TokenClaims {
            sub: user_id,
            email: email.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
            refresh: class == TokenClass::Refresh,
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
