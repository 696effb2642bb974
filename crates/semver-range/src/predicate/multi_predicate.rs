//! MultiPredicate - compound predicate combining multiple predicates

use std::fmt;
use std::sync::Arc;

use semver::Version;

use super::{MatchAllPredicate, MatchNonePredicate, Predicate};

/// A predicate combining multiple predicates with AND (conjunctive) or OR (disjunctive) logic
#[derive(Debug, Clone)]
pub struct MultiPredicate {
    predicates: Vec<Arc<dyn Predicate>>,
    conjunctive: bool,
}

impl MultiPredicate {
    /// Create a MultiPredicate over the given predicates, kept as they are
    pub fn new(predicates: Vec<Arc<dyn Predicate>>, conjunctive: bool) -> Self {
        MultiPredicate {
            predicates,
            conjunctive,
        }
    }

    /// Create a predicate combining `predicates`, simplifying where possible.
    ///
    /// Nested predicates of the same kind are flattened, identity elements
    /// are dropped, and an absorbing element replaces the whole composite.
    /// An empty AND matches everything; an empty OR matches nothing.
    pub fn create(predicates: Vec<Arc<dyn Predicate>>, conjunctive: bool) -> Arc<dyn Predicate> {
        let mut flattened: Vec<Arc<dyn Predicate>> = Vec::with_capacity(predicates.len());

        for predicate in predicates {
            let absorbing = if conjunctive {
                predicate.is_match_none()
            } else {
                predicate.is_match_all()
            };
            if absorbing {
                return predicate;
            }

            let identity = if conjunctive {
                predicate.is_match_all()
            } else {
                predicate.is_match_none()
            };
            if identity {
                continue;
            }

            match predicate.as_multi_predicate() {
                Some((children, child_conjunctive)) if child_conjunctive == conjunctive => {
                    flattened.extend(children.iter().cloned());
                }
                _ => flattened.push(predicate),
            }
        }

        match flattened.len() {
            0 if conjunctive => Arc::new(MatchAllPredicate::new()),
            0 => Arc::new(MatchNonePredicate::new()),
            1 => flattened.remove(0),
            _ => Arc::new(MultiPredicate::new(flattened, conjunctive)),
        }
    }

    /// Get the predicates
    pub fn predicates(&self) -> &[Arc<dyn Predicate>] {
        &self.predicates
    }

    /// Check if this is a conjunctive (AND) predicate
    pub fn is_conjunctive(&self) -> bool {
        self.conjunctive
    }

    /// Check if this is a disjunctive (OR) predicate
    pub fn is_disjunctive(&self) -> bool {
        !self.conjunctive
    }
}

impl Predicate for MultiPredicate {
    fn matches(&self, version: &Version) -> bool {
        if self.conjunctive {
            self.predicates.iter().all(|p| p.matches(version))
        } else {
            self.predicates.iter().any(|p| p.matches(version))
        }
    }

    fn as_multi_predicate(&self) -> Option<(&[Arc<dyn Predicate>], bool)> {
        Some((&self.predicates, self.conjunctive))
    }
}

impl fmt::Display for MultiPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.predicates.iter().map(|p| p.to_string()).collect();
        let separator = if self.conjunctive { " " } else { " || " };
        write!(f, "[{}]", parts.join(separator))
    }
}
