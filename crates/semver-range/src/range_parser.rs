//! Range expression parsing

use std::sync::Arc;

use semver::Version;

use crate::expansion::{expand, expand_caret, expand_tilde, VersionToken};
use crate::predicate::{Comparison, MultiPredicate, Predicate};
use crate::range::Range;
use crate::{Comparator, RangeError};

const OPERATOR_CHARS: &[char] = &['<', '>', '=', '!'];

/// A single term of a clause, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Term<'a> {
    /// `<op><version>` or a caret / tilde shorthand
    Simple(&'a str),
    /// `from - to`
    Hyphen(&'a str, &'a str),
    /// An operator token separated from its version by whitespace
    Spaced(&'a str, &'a str),
}

/// Split a term into its operator token and version token.
///
/// The operator is the leading run of `<`, `>`, `=` and `!`; it is not
/// validated here. The remainder must start like a version: a digit, a
/// `v`/`V` prefix or a wildcard.
pub fn split_term(term: &str) -> Result<(&str, &str), RangeError> {
    let split = term.find(|c: char| !OPERATOR_CHARS.contains(&c)).unwrap_or(term.len());
    let (operator, version) = term.split_at(split);

    match version.chars().next() {
        Some(c) if c.is_ascii_digit() || matches!(c, 'v' | 'V' | 'x' | 'X' | '*') => Ok((operator, version)),
        _ => Err(RangeError::MalformedTerm(term.to_string())),
    }
}

/// Build a single comparison from an operator token and a full version.
///
/// Partial and wildcard versions are rejected; use [`crate::parse_range`]
/// for those.
pub fn build_comparison(operator: &str, version: &str) -> Result<Comparison, RangeError> {
    let comparator = Comparator::parse(operator)?;
    match VersionToken::parse(version)? {
        VersionToken::Exact(version) => Ok(Comparison::new(comparator, version)),
        _ => Err(RangeError::invalid_version(version, "expected a full MAJOR.MINOR.PATCH version")),
    }
}

/// Parser turning range expressions into [`Range`] predicates
pub struct RangeParser;

impl RangeParser {
    /// Create a new range parser
    pub fn new() -> Self {
        RangeParser
    }

    /// Parse a range expression.
    ///
    /// Clauses are separated by `||` and combined with OR; the terms of a
    /// clause are separated by whitespace and combined with AND.
    pub fn parse(&self, input: &str) -> Result<Range, RangeError> {
        match self.parse_predicate(input) {
            Ok(predicate) => {
                log::debug!("Parsed range \"{}\" as {}", input, predicate);
                Ok(Range::with_source(predicate, input.trim()))
            }
            Err(err) => {
                log::debug!("Could not parse range \"{}\": {}", input, err);
                Err(err)
            }
        }
    }

    fn parse_predicate(&self, input: &str) -> Result<Arc<dyn Predicate>, RangeError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RangeError::EmptyRange);
        }

        let mut clauses = Vec::new();
        for clause in input.split("||") {
            let clause = clause.trim();
            if clause.is_empty() {
                return Err(RangeError::EmptyClause(input.to_string()));
            }
            clauses.push(self.parse_clause(clause)?);
        }

        Ok(MultiPredicate::create(clauses, false))
    }

    fn parse_clause(&self, clause: &str) -> Result<Arc<dyn Predicate>, RangeError> {
        let predicates = self
            .tokenize(clause)?
            .into_iter()
            .map(|term| self.parse_term(term))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MultiPredicate::create(predicates, true))
    }

    /// Split a clause on whitespace, gluing operator-only tokens to the
    /// following token and merging `a - b` into a hyphen term.
    fn tokenize<'a>(&self, clause: &'a str) -> Result<Vec<Term<'a>>, RangeError> {
        let mut terms: Vec<Term<'a>> = Vec::new();
        let mut tokens = clause.split_whitespace();

        while let Some(token) = tokens.next() {
            if token == "-" {
                let from = match terms.pop() {
                    Some(Term::Simple(from)) => from,
                    _ => return Err(RangeError::MalformedTerm(clause.to_string())),
                };
                let to = match tokens.next() {
                    Some(to) if to != "-" => to,
                    _ => return Err(RangeError::MalformedTerm(clause.to_string())),
                };
                terms.push(Term::Hyphen(from, to));
            } else if token.chars().all(|c| OPERATOR_CHARS.contains(&c)) {
                match tokens.next() {
                    Some(version) if version != "-" => terms.push(Term::Spaced(token, version)),
                    _ => return Err(RangeError::MalformedTerm(token.to_string())),
                }
            } else {
                terms.push(Term::Simple(token));
            }
        }

        Ok(terms)
    }

    fn parse_term(&self, term: Term<'_>) -> Result<Arc<dyn Predicate>, RangeError> {
        match term {
            Term::Simple(term) => {
                if let Some(rest) = term.strip_prefix('^') {
                    expand_caret(rest)
                } else if let Some(rest) = term.strip_prefix('~') {
                    expand_tilde(rest)
                } else {
                    let (operator, version) = split_term(term)?;
                    expand(Comparator::parse(operator)?, version)
                }
            }
            Term::Spaced(operator, version) => {
                if version.starts_with(OPERATOR_CHARS) {
                    return Err(RangeError::MalformedTerm(format!("{} {}", operator, version)));
                }
                let (_, version) = split_term(version)?;
                expand(Comparator::parse(operator)?, version)
            }
            Term::Hyphen(from, to) => {
                let lower = self.hyphen_endpoint(from)?;
                let upper = self.hyphen_endpoint(to)?;
                Ok(MultiPredicate::create(
                    vec![
                        expand(Comparator::GreaterThanOrEqual, lower)?,
                        expand(Comparator::LessThanOrEqual, upper)?,
                    ],
                    true,
                ))
            }
        }
    }

    /// Hyphen range endpoints are bare version tokens
    fn hyphen_endpoint<'a>(&self, endpoint: &'a str) -> Result<&'a str, RangeError> {
        match split_term(endpoint)? {
            ("", version) => Ok(version),
            _ => Err(RangeError::MalformedTerm(endpoint.to_string())),
        }
    }

    /// Check whether a version string satisfies a range expression
    pub fn satisfies(&self, version: &str, range: &str) -> Result<bool, RangeError> {
        let range = self.parse(range)?;
        let version = Version::parse(version.strip_prefix(['v', 'V']).unwrap_or(version))
            .map_err(|e| RangeError::invalid_version(version, e.to_string()))?;
        Ok(range.matches(&version))
    }
}

impl Default for RangeParser {
    fn default() -> Self {
        Self::new()
    }
}
