//! NextUp Test Utilities
//!
//! Centralized test infrastructure for the NextUp workspace:
//! - Proptest generators for tiers, ranked games, and ranking sets
//! - Fixture builders for common ranking scenarios

// Re-export core types for convenience
pub use nextup_core::{RankedGame, Ranker, RankerKind, RankingSet, Tier};

use proptest::prelude::*;
use uuid::Uuid;

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

/// Strategy to generate random UUIDs for property testing.
pub fn uuid_strategy() -> impl Strategy<Value = Uuid> {
    any::<[u8; 16]>().prop_map(Uuid::from_bytes)
}

/// Strategy to generate random tiers.
pub fn tier_strategy() -> impl Strategy<Value = Tier> {
    prop_oneof![
        Just(Tier::S),
        Just(Tier::A),
        Just(Tier::B),
        Just(Tier::C),
        Just(Tier::D),
        Just(Tier::F),
    ]
}

/// Strategy to generate random ranker kinds.
pub fn ranker_kind_strategy() -> impl Strategy<Value = RankerKind> {
    prop_oneof![Just(RankerKind::User), Just(RankerKind::Group)]
}

/// Strategy to generate a ranked game with a random id and tier.
pub fn ranked_game_strategy() -> impl Strategy<Value = RankedGame> {
    (uuid_strategy(), tier_strategy()).prop_map(|(game_id, tier)| RankedGame::new(game_id, tier))
}

/// Strategy to generate a ranking set with up to `max_games` games.
pub fn ranking_set_strategy(max_games: usize) -> impl Strategy<Value = RankingSet> {
    (
        uuid_strategy(),
        ranker_kind_strategy(),
        "[a-z]{3,12}",
        proptest::collection::vec(ranked_game_strategy(), 0..=max_games),
    )
        .prop_map(|(id, kind, name, games)| {
            let ranker = Ranker { id, kind, name };
            RankingSet::new(ranker).with_games(games)
        })
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Build a user-owned ranking set from (game, tier) pairs.
pub fn user_ranking(name: &str, games: &[(Uuid, Tier)]) -> RankingSet {
    RankingSet::new(Ranker::user(Uuid::now_v7(), name))
        .with_games(games.iter().map(|(id, tier)| RankedGame::new(*id, *tier)))
}

/// Build a group-owned ranking set from (game, tier) pairs.
pub fn group_ranking(name: &str, games: &[(Uuid, Tier)]) -> RankingSet {
    RankingSet::new(Ranker::group(Uuid::now_v7(), name))
        .with_games(games.iter().map(|(id, tier)| RankedGame::new(*id, *tier)))
}

/// Generate `n` fresh game ids.
pub fn game_ids(n: usize) -> Vec<Uuid> {
    (0..n).map(|_| Uuid::now_v7()).collect()
}
