//! Range - the public predicate value

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use semver::Version;

use crate::predicate::{FnPredicate, MatchAllPredicate, MatchNonePredicate, MultiPredicate, Predicate};
use crate::{RangeError, RangeParser};

/// A compiled version range.
///
/// Ranges are immutable and cheap to clone; they can be evaluated from any
/// number of threads at once.
#[derive(Debug, Clone)]
pub struct Range {
    predicate: Arc<dyn Predicate>,
    source: Option<String>,
}

impl Range {
    /// Wrap an arbitrary predicate
    pub fn from_predicate(predicate: Arc<dyn Predicate>) -> Self {
        Range {
            predicate,
            source: None,
        }
    }

    pub(crate) fn with_source(predicate: Arc<dyn Predicate>, source: &str) -> Self {
        Range {
            predicate,
            source: Some(source.to_string()),
        }
    }

    /// Build a range from a closure
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(&Version) -> bool + Send + Sync + 'static,
    {
        Self::from_predicate(Arc::new(FnPredicate::new(func)))
    }

    /// A range matching every version
    pub fn any() -> Self {
        Self::from_predicate(Arc::new(MatchAllPredicate::new()))
    }

    /// A range matching no version
    pub fn none() -> Self {
        Self::from_predicate(Arc::new(MatchNonePredicate::new()))
    }

    /// Check whether the version lies in this range
    pub fn matches(&self, version: &Version) -> bool {
        self.predicate.matches(version)
    }

    /// Range matching versions accepted by both `self` and `other`
    pub fn and(&self, other: &Range) -> Range {
        Self::from_predicate(MultiPredicate::create(
            vec![self.predicate.clone(), other.predicate.clone()],
            true,
        ))
    }

    /// Range matching versions accepted by `self` or `other`
    pub fn or(&self, other: &Range) -> Range {
        Self::from_predicate(MultiPredicate::create(
            vec![self.predicate.clone(), other.predicate.clone()],
            false,
        ))
    }

    /// The compiled predicate tree
    pub fn predicate(&self) -> &Arc<dyn Predicate> {
        &self.predicate
    }

    /// The expression this range was parsed from, if any
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Predicate for Range {
    fn matches(&self, version: &Version) -> bool {
        self.predicate.matches(version)
    }

    fn is_match_all(&self) -> bool {
        self.predicate.is_match_all()
    }

    fn is_match_none(&self) -> bool {
        self.predicate.is_match_none()
    }

    fn as_multi_predicate(&self) -> Option<(&[Arc<dyn Predicate>], bool)> {
        self.predicate.as_multi_predicate()
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}", source),
            None => write!(f, "{}", self.predicate),
        }
    }
}

/// Parse a range expression such as `>=1.2.3 <2.0.0 || ^3.1.0`
pub fn parse_range(input: &str) -> Result<Range, RangeError> {
    RangeParser::new().parse(input)
}

/// Parse a range expression known to be valid.
///
/// # Panics
///
/// Panics if `input` is not a valid range expression.
pub fn must_parse_range(input: &str) -> Range {
    match parse_range(input) {
        Ok(range) => range,
        Err(err) => panic!("Could not parse range \"{}\": {}", input, err),
    }
}
