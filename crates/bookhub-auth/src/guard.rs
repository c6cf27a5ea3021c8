//! Bearer token admission — signature, revocation, and class checks.

use tracing::debug;

use bookhub_core::error::AppError;

use crate::revocation::RevocationList;
use crate::token::{TokenClaims, TokenClass, TokenVerifier};

/// Admits or rejects bearer tokens for protected endpoints.
///
/// Checks run in a fixed order: cryptographic verification, then the
/// revocation list, then the expected token class. A token that fails an
/// earlier check never reaches a later one.
#[derive(Debug, Clone)]
pub struct TokenGuard {
    /// Signature and expiry verification.
    verifier: TokenVerifier,
    /// Revocation lookups.
    revocations: RevocationList,
}

impl TokenGuard {
    /// Creates a new guard from its two collaborators.
    pub fn new(verifier: TokenVerifier, revocations: RevocationList) -> Self {
        Self {
            verifier,
            revocations,
        }
    }

    /// Verifies a bearer token and enforces the expected class.
    pub async fn verify(
        &self,
        token: &str,
        expected: TokenClass,
    ) -> Result<TokenClaims, AppError> {
        let claims = self.verifier.decode(token)?;

        if self.revocations.is_revoked(claims.jti).await? {
            debug!(jti = %claims.jti, "Rejected revoked token");
            return Err(AppError::invalid_token("Token has been revoked"));
        }

        match (claims.class(), expected) {
            (TokenClass::Access, TokenClass::Access) => Ok(claims),
            (TokenClass::Refresh, TokenClass::Refresh) => Ok(claims),
            (TokenClass::Refresh, TokenClass::Access) => Err(AppError::access_token_required()),
            (TokenClass::Access, TokenClass::Refresh) => Err(AppError::refresh_token_required()),
        }
    }

    /// Returns the revocation list used by this guard.
    pub fn revocations(&self) -> &RevocationList {
        &self.revocations
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use bookhub_cache::CacheManager;
    use bookhub_cache::memory::MemoryCacheProvider;
    use bookhub_core::config::auth::AuthConfig;
    use bookhub_core::config::cache::MemoryCacheConfig;
    use bookhub_core::error::ErrorKind;
    use bookhub_entity::user::UserRole;

    use super::*;
    use crate::token::TokenIssuer;

    fn fixtures() -> (TokenIssuer, TokenGuard) {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        };
        let provider =
            MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 }, 300);
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));

        let issuer = TokenIssuer::new(&config).unwrap();
        let guard = TokenGuard::new(
            TokenVerifier::new(&config).unwrap(),
            RevocationList::new(cache, &config),
        );
        (issuer, guard)
    }

    #[tokio::test]
    async fn test_valid_access_token_admitted() {
        let (issuer, guard) = fixtures();
        let user_id = Uuid::new_v4();
        let pair = issuer
            .generate_token_pair(user_id, "reader@example.com", UserRole::User)
            .unwrap();

        let claims = guard
            .verify(&pair.access_token, TokenClass::Access)
            .await
            .unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[tokio::test]
    async fn test_refresh_token_rejected_where_access_required() {
        let (issuer, guard) = fixtures();
        let pair = issuer
            .generate_token_pair(Uuid::new_v4(), "reader@example.com", UserRole::User)
            .unwrap();

        let err = guard
            .verify(&pair.refresh_token, TokenClass::Access)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccessTokenRequired);
    }

    #[tokio::test]
    async fn test_access_token_rejected_where_refresh_required() {
        let (issuer, guard) = fixtures();
        let pair = issuer
            .generate_token_pair(Uuid::new_v4(), "reader@example.com", UserRole::User)
            .unwrap();

        let err = guard
            .verify(&pair.access_token, TokenClass::Refresh)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::RefreshTokenRequired);
    }

    #[tokio::test]
    async fn test_revoked_token_rejected() {
        let (issuer, guard) = fixtures();
        let pair = issuer
            .generate_token_pair(Uuid::new_v4(), "reader@example.com", UserRole::User)
            .unwrap();

        let claims = guard
            .verify(&pair.access_token, TokenClass::Access)
            .await
            .unwrap();
        guard
            .revocations()
            .revoke(claims.jti, claims.remaining_ttl_seconds())
            .await
            .unwrap();

        let err = guard
            .verify(&pair.access_token, TokenClass::Access)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[tokio::test]
    async fn test_revoking_access_leaves_refresh_valid() {
        let (issuer, guard) = fixtures();
        let pair = issuer
            .generate_token_pair(Uuid::new_v4(), "reader@example.com", UserRole::User)
            .unwrap();

        let claims = guard
            .verify(&pair.access_token, TokenClass::Access)
            .await
            .unwrap();
        guard
            .revocations()
            .revoke(claims.jti, claims.remaining_ttl_seconds())
            .await
            .unwrap();

        assert!(
            guard
                .verify(&pair.refresh_token, TokenClass::Refresh)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let (_, guard) = fixtures();
        let err = guard.verify("not.a.jwt", TokenClass::Access).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }
}
