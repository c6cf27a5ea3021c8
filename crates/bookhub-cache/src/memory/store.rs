//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;

use bookhub_core::config::cache::MemoryCacheConfig;
use bookhub_core::result::AppResult;
use bookhub_core::traits::cache::CacheProvider;

/// A cached value together with its absolute expiry time.
///
/// Moka enforces capacity bounds; per-entry TTL is enforced here so that
/// entries with different lifetimes (e.g. revocation entries sized to a
/// token's remaining lifetime) expire independently.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, CacheEntry>,
    /// Default TTL for entries.
    default_ttl: Duration,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig, default_ttl_seconds: u64) -> Self {
        let cache = Cache::builder().max_capacity(config.max_capacity).build();

        Self {
            cache,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }

    /// Fetch a live entry, evicting it if its TTL has elapsed.
    async fn live_entry(&self, key: &str) -> Option<CacheEntry> {
        let entry = self.cache.get(key).await?;
        if entry.is_expired() {
            self.cache.remove(key).await;
            return None;
        }
        Some(entry)
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.live_entry(key).await.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, value, self.default_ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.live_entry(key).await.is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MemoryCacheProvider {
        MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 }, 300)
    }

    #[tokio::test]
    async fn test_set_get_round_trip() {
        let cache = provider();
        cache
            .set("k1", "v1", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.get("k1").await.unwrap(), Some("v1".to_string()));
        assert!(cache.exists("k1").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let cache = provider();
        assert_eq!(cache.get("nope").await.unwrap(), None);
        assert!(!cache.exists("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = provider();
        cache
            .set("short", "v", Duration::from_millis(30))
            .await
            .unwrap();
        assert!(cache.exists("short").await.unwrap());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(cache.get("short").await.unwrap(), None);
        assert!(!cache.exists("short").await.unwrap());
    }

    #[tokio::test]
    async fn test_per_entry_ttls_are_independent() {
        let cache = provider();
        cache
            .set("short", "v", Duration::from_millis(30))
            .await
            .unwrap();
        cache
            .set("long", "v", Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!cache.exists("short").await.unwrap());
        assert!(cache.exists("long").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_and_flush() {
        let cache = provider();
        cache.set_default("a", "1").await.unwrap();
        cache.set_default("b", "2").await.unwrap();

        cache.delete("a").await.unwrap();
        assert!(!cache.exists("a").await.unwrap());

        cache.flush_all().await.unwrap();
        assert_eq!(cache.get("b").await.unwrap(), None);
    }
}
