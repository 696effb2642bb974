//! Facade for matching and ordering lists of version strings

use semver::Version;

use crate::comparator::precedence;
use crate::{Range, RangeParser};

/// High-level operations over version strings and range expressions
pub struct VersionFilter;

impl VersionFilter {
    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        RangeParser::new().satisfies(version, range).unwrap_or(false)
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match RangeParser::new().parse(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        Self::matching(versions, &range)
            .into_iter()
            .map(|(original, _)| original.to_string())
            .collect()
    }

    /// Highest version satisfying the range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let range = RangeParser::new().parse(range).ok()?;
        Self::matching(versions, &range)
            .into_iter()
            .max_by(|(_, a), (_, b)| precedence(a, b))
            .map(|(original, _)| original.to_string())
    }

    /// Lowest version satisfying the range
    pub fn min_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let range = RangeParser::new().parse(range).ok()?;
        Self::matching(versions, &range)
            .into_iter()
            .min_by(|(_, a), (_, b)| precedence(a, b))
            .map(|(original, _)| original.to_string())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(&str, Version)> = versions.iter().filter_map(|v| Some((*v, parse_version(v)?))).collect();

        // Stable sort keeps equal-precedence versions in input order
        parsed.sort_by(|(_, a), (_, b)| {
            let cmp = precedence(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed.into_iter().map(|(original, _)| original.to_string()).collect()
    }

    fn matching<'a>(versions: &[&'a str], range: &Range) -> Vec<(&'a str, Version)> {
        versions
            .iter()
            .filter_map(|v| {
                let version = parse_version(v)?;
                if range.matches(&version) {
                    Some((*v, version))
                } else {
                    None
                }
            })
            .collect()
    }
}

fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    Version::parse(version.strip_prefix(['v', 'V']).unwrap_or(version)).ok()
}
