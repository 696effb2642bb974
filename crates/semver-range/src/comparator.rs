//! Comparator table for range terms

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::RangeError;

/// Binary relation between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Equal (`=`, `==` or no operator)
    Equal,
    /// Not equal (`!=`, `!`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessThanOrEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterThanOrEqual,
}

impl Comparator {
    /// Look up the comparator for an operator token.
    ///
    /// The empty token means equality.
    pub fn parse(token: &str) -> Result<Self, RangeError> {
        match token {
            "" | "=" | "==" => Ok(Comparator::Equal),
            "!=" | "!" => Ok(Comparator::NotEqual),
            "<" => Ok(Comparator::LessThan),
            "<=" => Ok(Comparator::LessThanOrEqual),
            ">" => Ok(Comparator::GreaterThan),
            ">=" => Ok(Comparator::GreaterThanOrEqual),
            _ => Err(RangeError::InvalidComparator(token.to_string())),
        }
    }

    /// Evaluate `left <op> right`
    pub fn compare(&self, left: &Version, right: &Version) -> bool {
        let ordering = precedence(left, right);
        match self {
            Comparator::Equal => ordering == Ordering::Equal,
            Comparator::NotEqual => ordering != Ordering::Equal,
            Comparator::LessThan => ordering == Ordering::Less,
            Comparator::LessThanOrEqual => ordering != Ordering::Greater,
            Comparator::GreaterThan => ordering == Ordering::Greater,
            Comparator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }

    /// Canonical operator token
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Equal => "=",
            Comparator::NotEqual => "!=",
            Comparator::LessThan => "<",
            Comparator::LessThanOrEqual => "<=",
            Comparator::GreaterThan => ">",
            Comparator::GreaterThanOrEqual => ">=",
        }
    }

    /// Every operator token accepted by [`Comparator::parse`]
    pub fn supported_tokens() -> &'static [&'static str] {
        &["", "=", "==", "!=", "!", "<", "<=", ">", ">="]
    }
}

/// Semantic version precedence; build metadata does not participate.
pub(crate) fn precedence(left: &Version, right: &Version) -> Ordering {
    (left.major, left.minor, left.patch, &left.pre).cmp(&(right.major, right.minor, right.patch, &right.pre))
}

/// Look up the comparator for an operator token
pub fn parse_comparator(token: &str) -> Result<Comparator, RangeError> {
    Comparator::parse(token)
}

impl FromStr for Comparator {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::parse(s)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
