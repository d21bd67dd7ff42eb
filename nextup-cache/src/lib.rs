//! Ephemeral TTL cache for NextUp request handlers.
//!
//! A process-local key-value cache: string keys namespaced by convention
//! (`game:detail:<id>`, `game:search:<query>`), values stored with an
//! expiry timestamp, and a background sweeper bounding growth from keys
//! that are never read again.
//!
//! # Design Philosophy
//!
//! Absence is never an error. A key that was never set and a key whose TTL
//! has lapsed both read as `None`; expired entries are evicted as a side
//! effect of the read that discovers them. Writes are last-write-wins with
//! no versioning.
//!
//! The cache is injected explicitly into whatever needs it rather than
//! living behind a module-level singleton, so tests can run isolated
//! instances and a later swap to an external cache service stays behind
//! the [`CacheBackend`] seam.
//!
//! # Example
//!
//! ```ignore
//! let cache = Arc::new(MemoryCache::new());
//! let sweeper = Sweeper::spawn(Arc::clone(&cache), config.sweep_interval);
//!
//! let key = CacheKey::game_detail(game_id);
//! cache.set(key.as_str(), &detail, Duration::from_secs(300)).await?;
//! let hit: Option<GameDetail> = cache.get(key.as_str()).await?;
//!
//! // Bulk invalidation after a catalog refresh
//! cache.delete_pattern("game:*").await?;
//! sweeper.shutdown().await;
//! ```

pub mod config;
pub mod entry;
pub mod key;
pub mod memory;
pub mod sweep;
pub mod traits;

pub use config::CacheConfig;
pub use entry::CacheEntry;
pub use key::{CacheKey, KeyPattern};
pub use memory::MemoryCache;
pub use sweep::{Sweeper, SweeperHandle};
pub use traits::{CacheBackend, CacheStats};
