//! FnPredicate - wraps a caller supplied closure

use std::fmt;
use std::sync::Arc;

use semver::Version;

use super::Predicate;

type MatchFn = dyn Fn(&Version) -> bool + Send + Sync;

/// A predicate backed by a closure, for ranges built in code
#[derive(Clone)]
pub struct FnPredicate {
    func: Arc<MatchFn>,
}

impl FnPredicate {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Version) -> bool + Send + Sync + 'static,
    {
        FnPredicate { func: Arc::new(func) }
    }
}

impl Predicate for FnPredicate {
    fn matches(&self, version: &Version) -> bool {
        (self.func)(version)
    }
}

impl fmt::Debug for FnPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate").finish_non_exhaustive()
    }
}

impl fmt::Display for FnPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn>")
    }
}
