//! Cache entries: a stored value with its expiry timestamp.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde_json::Value;
use std::time::Duration;

/// A single cached value and its lifetime bounds.
///
/// Entries are owned exclusively by the cache map: created on `set`,
/// destroyed by the expiry sweep or an explicit delete. The value is held
/// as [`serde_json::Value`]; the backend owns (de)serialization at its
/// trait edge.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The stored value.
    pub value: Value,
    /// When this entry was written.
    pub cached_at: DateTime<Utc>,
    /// When this entry stops being readable.
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry expiring `ttl` after now.
    pub fn new(value: Value, ttl: Duration) -> Self {
        let cached_at = Utc::now();
        Self::with_expiry(value, cached_at, expiry_after(cached_at, ttl))
    }

    /// Create an entry with explicit timestamps.
    pub fn with_expiry(value: Value, cached_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value,
            cached_at,
            expires_at,
        }
    }

    /// Whether this entry is past its expiry as of `now`.
    ///
    /// An entry is readable strictly before `expires_at`; a TTL of zero is
    /// expired on the very next read.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Compute an expiry timestamp, saturating on overflow.
fn expiry_after(from: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    let ttl = ChronoDuration::from_std(ttl).unwrap_or(ChronoDuration::MAX);
    from.checked_add_signed(ttl)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
