//! JWT signature and expiry validation.

use jsonwebtoken::{DecodingKey, Validation, decode};

use bookhub_core::config::auth::AuthConfig;
use bookhub_core::error::AppError;

use super::claims::TokenClaims;

/// Validates JWT token signatures and expiration.
///
/// Verification is purely cryptographic; revocation checks live in
/// [`crate::revocation::RevocationList`] and are composed by
/// [`crate::guard::TokenGuard`].
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = super::signing_algorithm(&config.jwt_algorithm)?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Decodes a token and verifies its signature and expiration.
    ///
    /// Any failure (bad signature, malformed structure, expired, wrong
    /// algorithm) surfaces as an invalid-token error.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AppError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::invalid_token("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::invalid_token("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::invalid_token("Invalid token signature")
                }
                _ => AppError::invalid_token(format!("Token validation failed: {e}")),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use uuid::Uuid;

    use bookhub_entity::user::UserRole;

    use super::*;
    use crate::token::claims::TokenClass;
    use crate::token::issuer::TokenIssuer;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let issuer = TokenIssuer::new(&config()).unwrap();
        let verifier = TokenVerifier::new(&config()).unwrap();
        let user_id = Uuid::new_v4();

        let pair = issuer
            .generate_token_pair(user_id, "reader@example.com", UserRole::Admin)
            .unwrap();

        let access = verifier.decode(&pair.access_token).unwrap();
        assert_eq!(access.sub, user_id);
        assert_eq!(access.email, "reader@example.com");
        assert_eq!(access.role, UserRole::Admin);
        assert!(!access.refresh);

        let refresh = verifier.decode(&pair.refresh_token).unwrap();
        assert!(refresh.refresh);
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_pair_has_independent_jtis() {
        let issuer = TokenIssuer::new(&config()).unwrap();
        let verifier = TokenVerifier::new(&config()).unwrap();

        let pair = issuer
            .generate_token_pair(Uuid::new_v4(), "reader@example.com", UserRole::User)
            .unwrap();

        let access = verifier.decode(&pair.access_token).unwrap();
        let refresh = verifier.decode(&pair.refresh_token).unwrap();
        assert_ne!(access.jti, refresh.jti);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new(&config()).unwrap();
        let verifier = TokenVerifier::new(&config()).unwrap();

        // Expired well past the 5 second leeway.
        let token = issuer
            .generate_with_lifetime(
                Uuid::new_v4(),
                "reader@example.com",
                UserRole::User,
                TokenClass::Access,
                Duration::seconds(-30),
            )
            .unwrap();

        let err = verifier.decode(&token).unwrap_err();
        assert_eq!(err.kind, bookhub_core::error::ErrorKind::InvalidToken);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(&config()).unwrap();
        let other = AuthConfig {
            jwt_secret: "different-secret".to_string(),
            ..AuthConfig::default()
        };
        let verifier = TokenVerifier::new(&other).unwrap();

        let (token, _) = issuer
            .generate_access_token(Uuid::new_v4(), "reader@example.com", UserRole::User)
            .unwrap();
        assert!(verifier.decode(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let verifier = TokenVerifier::new(&config()).unwrap();
        assert!(verifier.decode("not.a.jwt").is_err());
        assert!(verifier.decode("").is_err());
    }
}
