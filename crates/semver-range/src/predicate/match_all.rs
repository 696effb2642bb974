//! MatchAllPredicate - matches any version

use std::fmt;

use semver::Version;

use super::Predicate;

/// A predicate that matches any version
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAllPredicate;

impl MatchAllPredicate {
    pub fn new() -> Self {
        MatchAllPredicate
    }
}

impl Predicate for MatchAllPredicate {
    fn matches(&self, _version: &Version) -> bool {
        true
    }

    fn is_match_all(&self) -> bool {
        true
    }
}

impl fmt::Display for MatchAllPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*")
    }
}
