//! Expansion of version tokens into predicates
//!
//! A version token is either a full semantic version or a partial / wildcard
//! form such as `1`, `1.2`, `1.x`, `1.2.*` or `x`. Partial forms stand for
//! the half-open interval `[lo, hi)` of every version they cover, and each
//! comparator maps that interval to explicit bounds before any [`Comparison`]
//! is built.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use semver::Version;

use crate::predicate::{Comparison, MatchAllPredicate, MatchNonePredicate, MultiPredicate, Predicate};
use crate::{Comparator, RangeError};

lazy_static! {
    // Partial versions: every component is a number or a wildcard
    static ref PARTIAL_RE: Regex = Regex::new(
        r"^(0|[1-9]\d*|[xX*])(?:\.(0|[1-9]\d*|[xX*]))?(?:\.(0|[1-9]\d*|[xX*]))?$"
    ).unwrap();
}

/// Classified version token
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum VersionToken {
    /// `x`, `X`, `*`
    Any,
    /// `M`, `M.x`, `M.x.x`
    Major(u64),
    /// `M.m`, `M.m.x`
    Minor(u64, u64),
    /// Fully specified version
    Exact(Version),
}

impl VersionToken {
    /// Classify a version token; one leading `v`/`V` is ignored.
    pub(crate) fn parse(token: &str) -> Result<Self, RangeError> {
        let stripped = token.strip_prefix(['v', 'V']).unwrap_or(token);

        if let Some(caps) = PARTIAL_RE.captures(stripped) {
            let parts = [caps.get(1), caps.get(2), caps.get(3)].map(|m| m.map(|m| m.as_str()));

            // Index of the first missing or wildcard component
            let first_gap = parts.iter().position(|p| p.map_or(true, is_wildcard));

            if let Some(gap) = first_gap {
                if parts[gap..].iter().flatten().any(|p| !is_wildcard(p)) {
                    return Err(RangeError::invalid_version(
                        token,
                        "a wildcard cannot be followed by a numeric component",
                    ));
                }

                return match gap {
                    0 => Ok(VersionToken::Any),
                    1 => Ok(VersionToken::Major(parse_component(token, parts[0])?)),
                    _ => Ok(VersionToken::Minor(
                        parse_component(token, parts[0])?,
                        parse_component(token, parts[1])?,
                    )),
                };
            }
        }

        Version::parse(stripped)
            .map(VersionToken::Exact)
            .map_err(|e| RangeError::invalid_version(token, e.to_string()))
    }

    /// Inclusive lower and exclusive upper bound of a partial token
    fn interval(&self, token: &str) -> Result<Option<(Version, Version)>, RangeError> {
        match self {
            VersionToken::Major(major) => Ok(Some((
                Version::new(*major, 0, 0),
                Version::new(increment(token, *major)?, 0, 0),
            ))),
            VersionToken::Minor(major, minor) => Ok(Some((
                Version::new(*major, *minor, 0),
                Version::new(*major, increment(token, *minor)?, 0),
            ))),
            VersionToken::Any | VersionToken::Exact(_) => Ok(None),
        }
    }
}

fn is_wildcard(component: &str) -> bool {
    matches!(component, "x" | "X" | "*")
}

fn parse_component(token: &str, component: Option<&str>) -> Result<u64, RangeError> {
    component
        .unwrap_or("0")
        .parse()
        .map_err(|_| RangeError::invalid_version(token, "numeric component out of range"))
}

fn increment(token: &str, component: u64) -> Result<u64, RangeError> {
    component
        .checked_add(1)
        .ok_or_else(|| RangeError::invalid_version(token, "carry overflow"))
}

fn comparison(comparator: Comparator, version: Version) -> Arc<dyn Predicate> {
    Arc::new(Comparison::new(comparator, version))
}

fn between(lower: Version, upper: Version) -> Arc<dyn Predicate> {
    MultiPredicate::create(
        vec![
            comparison(Comparator::GreaterThanOrEqual, lower),
            comparison(Comparator::LessThan, upper),
        ],
        true,
    )
}

/// Expand `<comparator><token>` into a predicate
pub(crate) fn expand(comparator: Comparator, token: &str) -> Result<Arc<dyn Predicate>, RangeError> {
    let parsed = VersionToken::parse(token)?;

    let predicate: Arc<dyn Predicate> = match (&parsed, parsed.interval(token)?) {
        (VersionToken::Any, _) => match comparator {
            Comparator::NotEqual => Arc::new(MatchNonePredicate::new()),
            _ => Arc::new(MatchAllPredicate::new()),
        },
        (VersionToken::Exact(version), _) => comparison(comparator, version.clone()),
        (_, Some((lower, upper))) => match comparator {
            Comparator::Equal => between(lower, upper),
            Comparator::NotEqual => MultiPredicate::create(
                vec![
                    comparison(Comparator::LessThan, lower),
                    comparison(Comparator::GreaterThanOrEqual, upper),
                ],
                false,
            ),
            Comparator::GreaterThan => comparison(Comparator::GreaterThanOrEqual, upper),
            Comparator::GreaterThanOrEqual => comparison(Comparator::GreaterThanOrEqual, lower),
            Comparator::LessThan => comparison(Comparator::LessThan, lower),
            Comparator::LessThanOrEqual => comparison(Comparator::LessThan, upper),
        },
        (_, None) => return Err(RangeError::invalid_version(token, "unbounded partial version")),
    };

    log::trace!("Expanded {}{} to {}", comparator.as_str(), token, predicate);
    Ok(predicate)
}

/// Expand a tilde range; `token` excludes the leading `~`.
///
/// `~1.2.3` allows patch-level changes, `~1.2` and `~1` behave like `1.2.x`
/// and `1.x`.
pub(crate) fn expand_tilde(token: &str) -> Result<Arc<dyn Predicate>, RangeError> {
    let predicate = match VersionToken::parse(token)? {
        VersionToken::Any => {
            return Err(RangeError::invalid_version(
                &format!("~{}", token),
                "tilde range requires a numeric component",
            ))
        }
        VersionToken::Exact(version) => {
            let upper = Version::new(version.major, increment(token, version.minor)?, 0);
            between(version, upper)
        }
        partial => {
            let (lower, upper) = partial
                .interval(token)?
                .ok_or_else(|| RangeError::invalid_version(token, "unbounded partial version"))?;
            between(lower, upper)
        }
    };

    log::trace!("Expanded ~{} to {}", token, predicate);
    Ok(predicate)
}

/// Expand a caret range; `token` excludes the leading `^`.
///
/// The upper bound increments the leftmost nonzero specified component, so
/// `^1.2.3` allows minor updates while `^0.2.3` and `^0.0.3` are pinned to
/// their minor and patch release respectively.
pub(crate) fn expand_caret(token: &str) -> Result<Arc<dyn Predicate>, RangeError> {
    let predicate = match VersionToken::parse(token)? {
        VersionToken::Any => {
            return Err(RangeError::invalid_version(
                &format!("^{}", token),
                "caret range requires a numeric component",
            ))
        }
        VersionToken::Major(major) => between(Version::new(major, 0, 0), Version::new(increment(token, major)?, 0, 0)),
        VersionToken::Minor(major, minor) => {
            let upper = if major > 0 {
                Version::new(increment(token, major)?, 0, 0)
            } else {
                Version::new(0, increment(token, minor)?, 0)
            };
            between(Version::new(major, minor, 0), upper)
        }
        VersionToken::Exact(version) => {
            let upper = if version.major > 0 {
                Version::new(increment(token, version.major)?, 0, 0)
            } else if version.minor > 0 {
                Version::new(0, increment(token, version.minor)?, 0)
            } else {
                Version::new(0, 0, increment(token, version.patch)?)
            };
            between(version, upper)
        }
    };

    log::trace!("Expanded ^{} to {}", token, predicate);
    Ok(predicate)
}
