//! NextUp Affinity - Tier-List Similarity Scoring
//!
//! Computes how closely other rankers' tier lists align with a querying
//! ranker's list. For every game two lists share, tier proximity
//! contributes to a running score; candidates with too few shared games
//! are dropped, the rest are ranked by their normalized score, and the top
//! matches are partitioned into user and group result lists.
//!
//! Everything here is a pure function over data already fetched into
//! memory: no locks, no shared state, no I/O. Results are computed fresh
//! per request and never persisted.

use nextup_core::{EntityId, RankerKind, RankingSet, Tier};
use serde::{Deserialize, Serialize};

// ============================================================================
// SCORING CONSTANTS
// ============================================================================

/// Minimum games two rankers must share for the comparison to carry
/// signal; candidates below this are discarded regardless of score.
pub const MIN_SHARED_GAMES: usize = 3;

/// Number of candidates returned, counted before the user/group split.
pub const MAX_MATCHES: usize = 10;

/// Proximity contributed by one shared game.
///
/// Exact tier agreement scores 6; maximal disagreement (S vs F) scores 1,
/// since the widest ordinal gap on the six-step scale is 5.
pub fn tier_proximity(a: Tier, b: Tier) -> i32 {
    6 - (a.ordinal() - b.ordinal()).abs()
}

// ============================================================================
// SCORES AND RESULTS
// ============================================================================

/// A scored candidate ranker.
///
/// Derived and ephemeral; serializes with camelCase field names for the
/// request-handling layer's JSON responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffinityScore {
    /// Candidate user or group id.
    pub id: EntityId,
    /// Candidate display name.
    pub name: String,
    /// Whether the candidate is a user or a group.
    pub kind: RankerKind,
    /// Number of games ranked by both parties.
    pub shared_games: usize,
    /// Sum of per-game proximities.
    pub raw_score: i32,
    /// Raw score normalized by shared-game count, so a few highly aligned
    /// games aren't diluted by a large shared set.
    pub score: f64,
}

/// Affinity results, partitioned by candidate kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AffinityMatches {
    /// Individual users, best match first.
    pub users: Vec<AffinityScore>,
    /// Groups, best match first.
    pub groups: Vec<AffinityScore>,
}

impl AffinityMatches {
    /// Total number of matches across both lists.
    pub fn len(&self) -> usize {
        self.users.len() + self.groups.len()
    }

    /// True if no candidate cleared the shared-game threshold.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.groups.is_empty()
    }
}

// ============================================================================
// MATCH COMPUTATION
// ============================================================================

/// Score every candidate against the owner's tier list and return the top
/// matches.
///
/// An owner with zero ranked games gets empty results immediately. A
/// candidate set owned by the querying ranker itself is skipped.
///
/// Ordering is fully deterministic: descending normalized score, ties
/// broken by higher shared-game count, then ascending candidate id. It
/// never depends on candidate enumeration order or sort stability.
pub fn find_matches(owner: &RankingSet, candidates: &[RankingSet]) -> AffinityMatches {
    if owner.is_empty() {
        return AffinityMatches::default();
    }

    let mut scored: Vec<AffinityScore> = candidates
        .iter()
        .filter(|candidate| candidate.ranker.id != owner.ranker.id)
        .filter_map(|candidate| score_candidate(owner, candidate))
        .collect();

    scored.sort_by(|a, b| {
        compare_normalized(b, a)
            .then_with(|| b.shared_games.cmp(&a.shared_games))
            .then_with(|| a.id.cmp(&b.id))
    });
    scored.truncate(MAX_MATCHES);

    let mut matches = AffinityMatches::default();
    for score in scored {
        match score.kind {
            RankerKind::User => matches.users.push(score),
            RankerKind::Group => matches.groups.push(score),
        }
    }
    matches
}

/// Score a single candidate, or `None` below the shared-game threshold.
fn score_candidate(owner: &RankingSet, candidate: &RankingSet) -> Option<AffinityScore> {
    let mut shared_games = 0usize;
    let mut raw_score = 0i32;

    for ranked in &owner.games {
        if let Some(candidate_tier) = candidate.tier_for(ranked.game_id) {
            shared_games += 1;
            raw_score += tier_proximity(ranked.tier, candidate_tier);
        }
    }

    if shared_games < MIN_SHARED_GAMES {
        return None;
    }

    Some(AffinityScore {
        id: candidate.ranker.id,
        name: candidate.ranker.name.clone(),
        kind: candidate.ranker.kind,
        shared_games,
        raw_score,
        score: raw_score as f64 / shared_games as f64,
    })
}

/// Compare normalized scores exactly via cross-multiplication.
///
/// `a.raw/a.shared` vs `b.raw/b.shared` compares as
/// `a.raw * b.shared` vs `b.raw * a.shared`, keeping equal ratios equal
/// without floating-point rounding in the ordering.
fn compare_normalized(a: &AffinityScore, b: &AffinityScore) -> std::cmp::Ordering {
    let lhs = a.raw_score as i64 * b.shared_games as i64;
    let rhs = b.raw_score as i64 * a.shared_games as i64;
    lhs.cmp(&rhs)
}

// ============================================================================
// TESTS
// ============================================================================
