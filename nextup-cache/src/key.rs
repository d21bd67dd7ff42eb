//! Namespaced cache keys and wildcard invalidation patterns.
//!
//! Keys render as `:`-joined segments (`game:detail:<id>`). The
//! constructors here are the only places key strings are assembled, so a
//! namespace rename touches one function instead of every call site.

use nextup_core::{CacheError, EntityId};
use regex::Regex;

/// Separator between key segments.
const SEPARATOR: char = ':';

/// A namespaced cache key in canonical `:`-joined form.
///
/// Construct via the per-namespace helpers rather than formatting strings
/// at call sites; the rendered form is what the backend stores and what
/// [`KeyPattern`] matches against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    rendered: String,
}

impl CacheKey {
    /// Build a key from an explicit namespace and segments.
    pub fn new(namespace: &str, segments: &[&str]) -> Self {
        let mut rendered = namespace.to_string();
        for segment in segments {
            rendered.push(SEPARATOR);
            rendered.push_str(segment);
        }
        Self { rendered }
    }

    /// Key for a game's detail payload: `game:detail:<id>`.
    pub fn game_detail(game_id: EntityId) -> Self {
        Self::new("game", &["detail", &game_id.to_string()])
    }

    /// Key for a game search result page: `game:search:<query>`.
    pub fn game_search(query: &str) -> Self {
        Self::new("game", &["search", query])
    }

    /// Key for a ranker's computed affinity matches: `affinity:<id>`.
    pub fn affinity(ranker_id: EntityId) -> Self {
        Self::new("affinity", &[&ranker_id.to_string()])
    }

    /// The canonical string form of this key.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.rendered
    }
}

/// A wildcard pattern over cache keys, used for bulk invalidation.
///
/// The only metacharacter is `*`, which matches any run of characters
/// (including none). Everything else matches literally, so `game:*`
/// matches exactly the keys prefixed `game:`. The pattern compiles to an
/// anchored regex once and is reused across the scan.
#[derive(Debug, Clone)]
pub struct KeyPattern {
    regex: Regex,
}

impl KeyPattern {
    /// Compile a wildcard pattern.
    ///
    /// Returns [`CacheError::InvalidPattern`] for an empty pattern or a
    /// pattern the regex engine rejects.
    pub fn compile(pattern: &str) -> Result<Self, CacheError> {
        if pattern.is_empty() {
            return Err(CacheError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern must not be empty".to_string(),
            });
        }

        let mut source = String::with_capacity(pattern.len() + 4);
        source.push('^');
        for ch in pattern.chars() {
            if ch == '*' {
                source.push_str(".*");
            } else {
                source.push_str(&regex::escape(&ch.to_string()));
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|e| CacheError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { regex })
    }

    /// Check whether a key matches this pattern.
    pub fn matches(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}
