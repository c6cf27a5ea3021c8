//! Token revocation tracking backed by the cache.
//!
//! Revoked tokens are recorded by their `jti` with a TTL sized to the
//! token's remaining lifetime, so entries disappear once the token would
//! have expired anyway.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use bookhub_cache::{CacheManager, keys};
use bookhub_core::config::auth::AuthConfig;
use bookhub_core::error::AppError;
use bookhub_core::traits::cache::CacheProvider;

/// Marker value stored for a revoked token.
const REVOKED: &str = "revoked";

/// Records and queries revoked token IDs.
#[derive(Debug, Clone)]
pub struct RevocationList {
    /// Cache backing the blocklist entries.
    cache: Arc<CacheManager>,
    /// Minimum TTL for a revocation entry.
    floor: Duration,
}

impl RevocationList {
    /// Creates a new revocation list from auth configuration.
    pub fn new(cache: Arc<CacheManager>, config: &AuthConfig) -> Self {
        Self {
            cache,
            floor: Duration::from_secs(config.revocation_floor_seconds),
        }
    }

    /// Revokes a token by its JWT ID.
    ///
    /// The entry lives for the token's remaining lifetime, floored at the
    /// configured minimum to cover clock skew near natural expiry.
    /// Revoking the same `jti` twice is a no-op.
    pub async fn revoke(&self, jti: Uuid, remaining_ttl_seconds: u64) -> Result<(), AppError> {
        let ttl = Duration::from_secs(remaining_ttl_seconds).max(self.floor);
        let key = keys::token_blocklist(jti);
        self.cache.set(&key, REVOKED, ttl).await?;
        debug!(%jti, ttl_seconds = ttl.as_secs(), "Token revoked");
        Ok(())
    }

    /// Checks whether a JWT ID has been revoked.
    ///
    /// Cache failures propagate as errors rather than reading as "not
    /// revoked", so an unreachable cache rejects tokens instead of
    /// accepting revoked ones.
    pub async fn is_revoked(&self, jti: Uuid) -> Result<bool, AppError> {
        let key = keys::token_blocklist(jti);
        self.cache.exists(&key).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use bookhub_core::config::cache::MemoryCacheConfig;
    use bookhub_core::result::AppResult;

    use super::*;

    fn memory_list(floor_seconds: u64) -> RevocationList {
        let provider = bookhub_cache::memory::MemoryCacheProvider::new(
            &MemoryCacheConfig { max_capacity: 100 },
            300,
        );
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));
        let config = AuthConfig {
            revocation_floor_seconds: floor_seconds,
            ..AuthConfig::default()
        };
        RevocationList::new(cache, &config)
    }

    /// Provider whose every operation fails, simulating an unreachable cache.
    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl CacheProvider for FailingProvider {
        async fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::cache("connection refused"))
        }
        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> AppResult<()> {
            Err(AppError::cache("connection refused"))
        }
        async fn set_default(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::cache("connection refused"))
        }
        async fn delete(&self, _key: &str) -> AppResult<()> {
            Err(AppError::cache("connection refused"))
        }
        async fn exists(&self, _key: &str) -> AppResult<bool> {
            Err(AppError::cache("connection refused"))
        }
        async fn health_check(&self) -> AppResult<bool> {
            Ok(false)
        }
        async fn flush_all(&self) -> AppResult<()> {
            Err(AppError::cache("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_revoke_then_is_revoked() {
        let list = memory_list(60);
        let jti = Uuid::new_v4();

        assert!(!list.is_revoked(jti).await.unwrap());
        list.revoke(jti, 600).await.unwrap();
        assert!(list.is_revoked(jti).await.unwrap());
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let list = memory_list(60);
        let jti = Uuid::new_v4();

        list.revoke(jti, 600).await.unwrap();
        list.revoke(jti, 600).await.unwrap();
        assert!(list.is_revoked(jti).await.unwrap());
    }

    #[tokio::test]
    async fn test_entry_expires_with_token_lifetime() {
        // Floor of zero so the remaining-lifetime TTL is used as-is.
        let list = memory_list(0);
        let jti = Uuid::new_v4();

        // Remaining lifetime of zero seconds expires immediately.
        list.revoke(jti, 0).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!list.is_revoked(jti).await.unwrap());
    }

    #[tokio::test]
    async fn test_floor_keeps_short_lived_entries() {
        let list = memory_list(60);
        let jti = Uuid::new_v4();

        // Token about to expire naturally still gets the floor TTL.
        list.revoke(jti, 0).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(list.is_revoked(jti).await.unwrap());
    }

    #[tokio::test]
    async fn test_cache_failure_propagates() {
        let cache = Arc::new(CacheManager::from_provider(Arc::new(FailingProvider)));
        let list = RevocationList::new(cache, &AuthConfig::default());
        let jti = Uuid::new_v4();

        assert!(list.revoke(jti, 600).await.is_err());
        assert!(list.is_revoked(jti).await.is_err());
    }
}
