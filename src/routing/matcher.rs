//! Path pattern matching.
//!
//! # Responsibilities
//! - Classify registered patterns (exact path vs. subtree)
//! - Match a request path against a pattern
//!
//! # Design Decisions
//! - Path matching is case-sensitive, no normalization
//! - A trailing `/` makes the pattern a subtree: it matches every path it prefixes
//! - No regex, no wildcards, no parameters

/// A registered path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathPattern {
    /// Matches only the identical path.
    Exact(String),
    /// Matches any path starting with the prefix (which ends in `/`).
    Subtree(String),
}

impl PathPattern {
    /// Parse a pattern. Returns `None` for the empty pattern.
    pub fn parse(pattern: &str) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        if pattern.ends_with('/') {
            Some(Self::Subtree(pattern.to_string()))
        } else {
            Some(Self::Exact(pattern.to_string()))
        }
    }

    /// The pattern text as registered.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(p) | Self::Subtree(p) => p,
        }
    }

    /// Returns true if `path` matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(p) => path == p.as_str(),
            Self::Subtree(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}
