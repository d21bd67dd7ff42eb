//! Cache backend trait and usage statistics.
//!
//! The trait abstracts over cache implementations (in-memory today, an
//! external cache service later) so consumers depend on the seam rather
//! than a concrete backend.

use async_trait::async_trait;
use nextup_core::NextUpResult;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Cache backend trait for pluggable cache implementations.
///
/// # Key Format
///
/// Keys are plain strings, namespaced by convention via
/// [`CacheKey`](crate::key::CacheKey) (`game:detail:<id>`,
/// `game:search:<query>`). TTLs are supplied by the caller per write.
///
/// # Absence Semantics
///
/// "Never set" and "expired" are indistinguishable to callers: both read
/// as `Ok(None)`. Implementations must evict an expired entry as a side
/// effect of the read that discovers it.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Get a value from the cache.
    ///
    /// Returns the stored value only if the current time is before the
    /// entry's expiry. A stored value that fails to deserialize as `T`
    /// is an error, not a silent miss.
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> NextUpResult<Option<T>>;

    /// Store a value with `expires_at = now + ttl`.
    ///
    /// Unconditionally overwrites any existing entry for the key
    /// (last-write-wins, no versioning).
    async fn set<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> NextUpResult<()>;

    /// Remove a single entry.
    ///
    /// Idempotent: returns `true` if an entry was removed, `false` if the
    /// key was absent.
    async fn delete(&self, key: &str) -> NextUpResult<bool>;

    /// Remove every entry whose key matches a wildcard pattern.
    ///
    /// The single `*` metacharacter matches any run of characters, so
    /// `game:*` invalidates the whole `game:` namespace. Returns the
    /// number of entries removed.
    async fn delete_pattern(&self, pattern: &str) -> NextUpResult<u64>;

    /// One sweep pass: evict every entry past its expiry.
    ///
    /// Returns the number of entries evicted. The background sweeper calls
    /// this on a fixed interval to bound growth from keys that are never
    /// read again.
    async fn purge_expired(&self) -> NextUpResult<u64>;

    /// Get cache statistics.
    async fn stats(&self) -> NextUpResult<CacheStats>;
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses (absent or expired).
    pub misses: u64,
    /// Number of entries currently in cache.
    pub entry_count: u64,
    /// Number of entries evicted because their TTL lapsed.
    pub expirations: u64,
}

impl CacheStats {
    /// Calculate the hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
