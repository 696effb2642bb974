//! Predicate trait

use std::sync::Arc;

use semver::Version;

/// Trait for everything a version can be tested against
pub trait Predicate: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Check whether the version satisfies this predicate
    fn matches(&self, version: &Version) -> bool;

    /// Check if this predicate accepts every version
    fn is_match_all(&self) -> bool {
        false
    }

    /// Check if this predicate rejects every version
    fn is_match_none(&self) -> bool {
        false
    }

    /// Children and conjunctivity if this is a MultiPredicate
    fn as_multi_predicate(&self) -> Option<(&[Arc<dyn Predicate>], bool)> {
        None
    }
}
