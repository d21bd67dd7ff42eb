//! In-memory cache backend.
//!
//! Process-local: a restart loses every entry, which is documented
//! behavior rather than a defect. Nothing is promised across processes.
//! There is no eviction policy beyond TTL; memory exhaustion from
//! unbounded writes is out of scope.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use nextup_core::{CacheError, NextUpResult};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use crate::config::CacheConfig;
use crate::entry::CacheEntry;
use crate::key::KeyPattern;
use crate::traits::{CacheBackend, CacheStats};

/// Map plus counters, guarded together so a read that evicts an expired
/// entry updates both atomically.
#[derive(Debug, Default)]
struct MemoryCacheState {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

/// In-memory TTL cache.
///
/// # Example
///
/// ```ignore
/// let cache = MemoryCache::new();
/// cache.set("game:detail:42", &detail, Duration::from_secs(300)).await?;
/// let hit: Option<GameDetail> = cache.get("game:detail:42").await?;
/// ```
#[derive(Debug)]
pub struct MemoryCache {
    state: RwLock<MemoryCacheState>,
    config: CacheConfig,
}

impl MemoryCache {
    /// Create a cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a cache with explicit configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            state: RwLock::new(MemoryCacheState::default()),
            config,
        }
    }

    /// The configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Store a value using the configured default TTL.
    pub async fn set_default<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> NextUpResult<()> {
        self.set(key, value, self.config.default_ttl).await
    }

    /// Number of entries currently stored, expired or not.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    /// True if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    /// Whether a key is currently listed, without touching hit/miss
    /// counters or evicting. Expired-but-unswept entries still count.
    pub async fn contains_key(&self, key: &str) -> bool {
        self.state.read().await.entries.contains_key(key)
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> NextUpResult<Option<T>> {
        enum Lookup {
            Hit(serde_json::Value),
            Expired,
            Absent,
        }

        let now = Utc::now();
        let mut state = self.state.write().await;

        let lookup = match state.entries.get(key) {
            Some(entry) if entry.is_expired(now) => Lookup::Expired,
            Some(entry) => Lookup::Hit(entry.value.clone()),
            None => Lookup::Absent,
        };

        let value = match lookup {
            Lookup::Hit(value) => value,
            Lookup::Expired => {
                // Evict on discovery; the sweep no longer lists this key.
                state.entries.remove(key);
                state.stats.expirations += 1;
                state.stats.misses += 1;
                return Ok(None);
            }
            Lookup::Absent => {
                state.stats.misses += 1;
                return Ok(None);
            }
        };
        state.stats.hits += 1;
        drop(state);

        let typed = serde_json::from_value(value).map_err(|e| CacheError::Deserialize {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(typed))
    }

    async fn set<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> NextUpResult<()> {
        let value = serde_json::to_value(value).map_err(|e| CacheError::Serialize {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        let mut state = self.state.write().await;
        state
            .entries
            .insert(key.to_string(), CacheEntry::new(value, ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> NextUpResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.entries.remove(key).is_some())
    }

    async fn delete_pattern(&self, pattern: &str) -> NextUpResult<u64> {
        let pattern_compiled = KeyPattern::compile(pattern)?;

        let mut state = self.state.write().await;
        let before = state.entries.len();
        state
            .entries
            .retain(|key, _| !pattern_compiled.matches(key));
        let removed = (before - state.entries.len()) as u64;
        drop(state);

        if removed > 0 {
            tracing::debug!(pattern, removed, "bulk cache invalidation");
        }
        Ok(removed)
    }

    async fn purge_expired(&self) -> NextUpResult<u64> {
        let now = Utc::now();

        let mut state = self.state.write().await;
        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_expired(now));
        let evicted = (before - state.entries.len()) as u64;
        state.stats.expirations += evicted;
        Ok(evicted)
    }

    async fn stats(&self) -> NextUpResult<CacheStats> {
        let state = self.state.read().await;
        let mut stats = state.stats.clone();
        stats.entry_count = state.entries.len() as u64;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct GameDetail {
        game_id: Uuid,
        title: String,
    }

    fn make_detail(title: &str) -> GameDetail {
        GameDetail {
            game_id: Uuid::now_v7(),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_after_set_returns_value() {
        let cache = MemoryCache::new();
        let detail = make_detail("Celeste");

        cache
            .set("game:detail:1", &detail, Duration::from_secs(60))
            .await
            .unwrap();

        let hit: Option<GameDetail> = cache.get("game:detail:1").await.unwrap();
        assert_eq!(hit, Some(detail));
    }

    #[tokio::test]
    async fn test_absent_key_is_none() {
        let cache = MemoryCache::new();
        let miss: Option<GameDetail> = cache.get("game:detail:missing").await.unwrap();
        assert_eq!(miss, None);
    }

    #[tokio::test]
    async fn test_expired_entry_reads_absent_and_is_evicted() {
        let cache = MemoryCache::new();
        cache
            .set("game:detail:1", &json!("stale"), Duration::ZERO)
            .await
            .unwrap();
        assert!(cache.contains_key("game:detail:1").await);

        let miss: Option<String> = cache.get("game:detail:1").await.unwrap();
        assert_eq!(miss, None);
        assert!(!cache.contains_key("game:detail:1").await);
    }

    #[tokio::test]
    async fn test_set_overwrites_unconditionally() {
        let cache = MemoryCache::new();
        cache
            .set("game:detail:1", &"first", Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("game:detail:1", &"second", Duration::from_secs(60))
            .await
            .unwrap();

        let hit: Option<String> = cache.get("game:detail:1").await.unwrap();
        assert_eq!(hit.as_deref(), Some("second"));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let cache = MemoryCache::new();
        cache
            .set("game:detail:1", &1, Duration::from_secs(60))
            .await
            .unwrap();

        assert!(cache.delete("game:detail:1").await.unwrap());
        assert!(!cache.delete("game:detail:1").await.unwrap());
        let miss: Option<i32> = cache.get("game:detail:1").await.unwrap();
        assert_eq!(miss, None);
    }

    #[tokio::test]
    async fn test_delete_pattern_removes_exactly_matching_namespace() {
        let cache = MemoryCache::new();
        cache
            .set("game:detail:1", &1, Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("game:search:celeste", &2, Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("affinity:abc", &3, Duration::from_secs(60))
            .await
            .unwrap();

        let removed = cache.delete_pattern("game:*").await.unwrap();
        assert_eq!(removed, 2);

        assert!(!cache.contains_key("game:detail:1").await);
        assert!(!cache.contains_key("game:search:celeste").await);
        assert!(cache.contains_key("affinity:abc").await);
    }

    #[tokio::test]
    async fn test_delete_pattern_invalid_glob_errors() {
        let cache = MemoryCache::new();
        let err = cache.delete_pattern("").await.unwrap_err();
        assert!(matches!(
            err,
            nextup_core::NextUpError::Cache(CacheError::InvalidPattern { .. })
        ));
    }

    #[tokio::test]
    async fn test_purge_expired_evicts_only_lapsed_entries() {
        let cache = MemoryCache::new();
        cache
            .set("game:detail:live", &1, Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("game:detail:dead", &2, Duration::ZERO)
            .await
            .unwrap();

        let evicted = cache.purge_expired().await.unwrap();
        assert_eq!(evicted, 1);
        assert!(cache.contains_key("game:detail:live").await);
        assert!(!cache.contains_key("game:detail:dead").await);

        // A second pass finds nothing further.
        assert_eq!(cache.purge_expired().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_stats_accounting() {
        let cache = MemoryCache::new();
        cache
            .set("game:detail:1", &1, Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("game:detail:2", &2, Duration::ZERO)
            .await
            .unwrap();

        let _: Option<i32> = cache.get("game:detail:1").await.unwrap(); // hit
        let _: Option<i32> = cache.get("game:detail:2").await.unwrap(); // expired -> miss
        let _: Option<i32> = cache.get("game:detail:3").await.unwrap(); // absent -> miss

        let stats = cache.stats().await.unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.entry_count, 1);
        assert!((stats.hit_rate() - 1.0 / 3.0).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_type_mismatch_is_error_not_miss() {
        let cache = MemoryCache::new();
        cache
            .set("game:detail:1", &"not a number", Duration::from_secs(60))
            .await
            .unwrap();

        let result: NextUpResult<Option<i64>> = cache.get("game:detail:1").await;
        assert!(matches!(
            result.unwrap_err(),
            nextup_core::NextUpError::Cache(CacheError::Deserialize { .. })
        ));
    }

    #[tokio::test]
    async fn test_set_default_uses_configured_ttl() {
        let config = CacheConfig::new().with_default_ttl(Duration::from_secs(60));
        let cache = MemoryCache::with_config(config);

        cache.set_default("game:detail:1", &1).await.unwrap();
        let hit: Option<i32> = cache.get("game:detail:1").await.unwrap();
        assert_eq!(hit, Some(1));
    }
}
