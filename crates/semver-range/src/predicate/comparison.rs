//! Comparison - a single comparator applied to a fixed version

use std::fmt;

use semver::Version;

use super::Predicate;
use crate::Comparator;

/// A resolved comparator and version pair, e.g. `>=1.2.3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    comparator: Comparator,
    version: Version,
}

impl Comparison {
    pub fn new(comparator: Comparator, version: Version) -> Self {
        Comparison { comparator, version }
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl Predicate for Comparison {
    fn matches(&self, version: &Version) -> bool {
        self.comparator.compare(version, &self.version)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.version)
    }
}
