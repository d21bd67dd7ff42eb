//! NextUp Core - Domain Types
//!
//! Pure data structures shared across the NextUp workspace: tier ordinals,
//! rankers and their ranking sets, and the error taxonomy. No business
//! logic lives here.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod entities;
pub mod error;
pub mod tier;

pub use entities::{RankedGame, Ranker, RankerKind, RankerKindParseError, RankingSet};
pub use error::{CacheError, NextUpError, NextUpResult};
pub use tier::{Tier, TierParseError};

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Entity identifier using UUIDv7 for timestamp-sortable IDs.
pub type EntityId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 EntityId (timestamp-sortable).
pub fn new_entity_id() -> EntityId {
    Uuid::now_v7()
}
