//! MatchNonePredicate - matches no version

use std::fmt;

use semver::Version;

use super::Predicate;

/// A predicate that matches no version
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchNonePredicate;

impl MatchNonePredicate {
    pub fn new() -> Self {
        MatchNonePredicate
    }
}

impl Predicate for MatchNonePredicate {
    fn matches(&self, _version: &Version) -> bool {
        false
    }

    fn is_match_none(&self) -> bool {
        true
    }
}

impl fmt::Display for MatchNonePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<none>")
    }
}
