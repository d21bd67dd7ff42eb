//! Rankers and their tier-ranked game sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::tier::Tier;
use crate::EntityId;

// ============================================================================
// RANKERS
// ============================================================================

/// Kind discriminator for ranking owners.
///
/// Tier lists are owned either by an individual user or by a group;
/// affinity results are partitioned along this axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankerKind {
    User,
    Group,
}

impl RankerKind {
    /// Convert to database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            RankerKind::User => "user",
            RankerKind::Group => "group",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Result<Self, RankerKindParseError> {
        match s.to_lowercase().as_str() {
            "user" => Ok(RankerKind::User),
            "group" => Ok(RankerKind::Group),
            _ => Err(RankerKindParseError(s.to_string())),
        }
    }
}

impl fmt::Display for RankerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for RankerKind {
    type Err = RankerKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid ranker kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankerKindParseError(pub String);

impl fmt::Display for RankerKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid ranker kind: {}", self.0)
    }
}

impl std::error::Error for RankerKindParseError {}

/// The owner of a ranking set: a user or a group, with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranker {
    /// Unique identifier of the user or group.
    pub id: EntityId,
    /// Whether this ranker is an individual user or a group.
    pub kind: RankerKind,
    /// Display name, surfaced verbatim in affinity results.
    pub name: String,
}

impl Ranker {
    /// Create a user ranker.
    pub fn user(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            kind: RankerKind::User,
            name: name.into(),
        }
    }

    /// Create a group ranker.
    pub fn group(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            kind: RankerKind::Group,
            name: name.into(),
        }
    }
}

// ============================================================================
// RANKINGS
// ============================================================================

/// A single game placed on a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedGame {
    /// The game being ranked.
    pub game_id: EntityId,
    /// The tier it was placed on.
    pub tier: Tier,
}

impl RankedGame {
    /// Create a new ranked game.
    pub fn new(game_id: EntityId, tier: Tier) -> Self {
        Self { game_id, tier }
    }
}

/// A ranker's tier list: the ranker plus every game they have placed.
///
/// Invariant: each game appears at most once. [`RankingSet::insert`]
/// replaces any existing placement for the same game rather than
/// duplicating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSet {
    /// The owning user or group.
    pub ranker: Ranker,
    /// Ranked games, one entry per game.
    pub games: Vec<RankedGame>,
}

impl RankingSet {
    /// Create an empty ranking set for the given ranker.
    pub fn new(ranker: Ranker) -> Self {
        Self {
            ranker,
            games: Vec::new(),
        }
    }

    /// Add ranked games, replacing any existing placement per game.
    pub fn with_games(mut self, games: impl IntoIterator<Item = RankedGame>) -> Self {
        for game in games {
            self.insert(game);
        }
        self
    }

    /// Place a game on a tier, replacing any previous placement.
    pub fn insert(&mut self, game: RankedGame) {
        if let Some(existing) = self
            .games
            .iter_mut()
            .find(|ranked| ranked.game_id == game.game_id)
        {
            existing.tier = game.tier;
        } else {
            self.games.push(game);
        }
    }

    /// Look up the tier this set places a game on, if any.
    pub fn tier_for(&self, game_id: EntityId) -> Option<Tier> {
        self.games
            .iter()
            .find(|ranked| ranked.game_id == game_id)
            .map(|ranked| ranked.tier)
    }

    /// Number of ranked games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True if no games have been ranked.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_ranker_kind_db_str_roundtrip() {
        for kind in [RankerKind::User, RankerKind::Group] {
            assert_eq!(RankerKind::from_db_str(kind.as_db_str()), Ok(kind));
        }
    }

    #[test]
    fn test_ranker_kind_invalid() {
        let err = RankerKind::from_db_str("channel").unwrap_err();
        assert!(format!("{}", err).contains("channel"));
    }

    #[test]
    fn test_ranker_constructors() {
        let id = Uuid::now_v7();
        let user = Ranker::user(id, "alice");
        assert_eq!(user.kind, RankerKind::User);
        assert_eq!(user.name, "alice");

        let group = Ranker::group(id, "couch co-op");
        assert_eq!(group.kind, RankerKind::Group);
    }

    #[test]
    fn test_insert_replaces_existing_placement() {
        let game_id = Uuid::now_v7();
        let mut set = RankingSet::new(Ranker::user(Uuid::now_v7(), "alice"));
        set.insert(RankedGame::new(game_id, Tier::B));
        set.insert(RankedGame::new(game_id, Tier::S));

        assert_eq!(set.len(), 1);
        assert_eq!(set.tier_for(game_id), Some(Tier::S));
    }

    #[test]
    fn test_tier_for_absent_game() {
        let set = RankingSet::new(Ranker::user(Uuid::now_v7(), "alice"));
        assert!(set.is_empty());
        assert_eq!(set.tier_for(Uuid::now_v7()), None);
    }

    #[test]
    fn test_with_games_dedupes() {
        let game_id = Uuid::now_v7();
        let other = Uuid::now_v7();
        let set = RankingSet::new(Ranker::user(Uuid::now_v7(), "alice")).with_games([
            RankedGame::new(game_id, Tier::A),
            RankedGame::new(other, Tier::C),
            RankedGame::new(game_id, Tier::F),
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.tier_for(game_id), Some(Tier::F));
        assert_eq!(set.tier_for(other), Some(Tier::C));
    }
}
