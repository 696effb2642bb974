//! Semantic version range expressions
//!
//! This crate parses range strings such as `>=1.2.3 <2.0.0 || ^3.1.0` into a
//! [`Range`], an immutable predicate over [`Version`]s. The accepted grammar
//! covers the forms commonly found in package manifests: bare and partial
//! versions, `x`/`X`/`*` wildcards, an optional leading `v`, caret and tilde
//! shorthands, hyphen ranges, and `||` alternatives.
//!
//! ```
//! use semver_range::{parse_range, Version};
//!
//! let range = parse_range(">1.2.2 <1.2.4 || ^2.0.0").unwrap();
//! assert!(range.matches(&Version::new(1, 2, 3)));
//! assert!(range.matches(&Version::new(2, 9, 9)));
//! assert!(!range.matches(&Version::new(3, 0, 0)));
//! ```

mod comparator;
mod error;
mod expansion;
pub mod predicate;
mod range;
mod range_parser;
mod version_filter;

pub use comparator::{parse_comparator, Comparator};
pub use error::RangeError;
pub use predicate::{Comparison, FnPredicate, MatchAllPredicate, MatchNonePredicate, MultiPredicate, Predicate};
pub use range::{must_parse_range, parse_range, Range};
pub use range_parser::{build_comparison, split_term, RangeParser};
pub use semver::Version;
pub use version_filter::VersionFilter;
