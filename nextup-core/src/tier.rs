//! Tier ordinals for game rankings.
//!
//! Tiers form a closed ordinal scale from S (best) down to F. All scoring
//! arithmetic goes through [`Tier::ordinal`] rather than comparing labels,
//! so relabeling a tier can never silently reorder the scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A ranking tier on the S-through-F scale.
///
/// The ordinal mapping is explicit: S=6, A=5, B=4, C=3, D=2, F=1. Exact
/// agreement between two rankers therefore scores a proximity of 6 and
/// maximal disagreement (S vs F) scores 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Tier {
    /// All tiers, best first.
    pub const ALL: [Tier; 6] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D, Tier::F];

    /// Ordinal value of this tier (S=6 .. F=1).
    pub fn ordinal(&self) -> i32 {
        match self {
            Tier::S => 6,
            Tier::A => 5,
            Tier::B => 4,
            Tier::C => 3,
            Tier::D => 2,
            Tier::F => 1,
        }
    }

    /// Convert to database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
            Tier::F => "F",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Result<Self, TierParseError> {
        match s.to_uppercase().as_str() {
            "S" => Ok(Tier::S),
            "A" => Ok(Tier::A),
            "B" => Ok(Tier::B),
            "C" => Ok(Tier::C),
            "D" => Ok(Tier::D),
            "F" => Ok(Tier::F),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for Tier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid tier string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierParseError(pub String);

impl fmt::Display for TierParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid tier: {}", self.0)
    }
}

impl std::error::Error for TierParseError {}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: parsing is total; arbitrary input either parses to a
        /// tier whose label round-trips, or errors without panicking.
        #[test]
        fn prop_parse_total(input in ".{0,8}") {
            match Tier::from_db_str(&input) {
                Ok(tier) => prop_assert_eq!(tier.as_db_str(), input.to_uppercase()),
                Err(TierParseError(original)) => prop_assert_eq!(original, input),
            }
        }

        /// Property: ordinals stay within the closed 1..=6 scale.
        #[test]
        fn prop_ordinal_in_range(index in 0usize..6) {
            let tier = Tier::ALL[index];
            prop_assert!((1..=6).contains(&tier.ordinal()));
        }
    }
}
