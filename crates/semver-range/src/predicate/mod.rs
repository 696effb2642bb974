//! Predicate types for version matching

mod comparison;
mod fn_predicate;
mod match_all;
mod match_none;
mod multi_predicate;
mod predicate_interface;

pub use comparison::Comparison;
pub use fn_predicate::FnPredicate;
pub use match_all::MatchAllPredicate;
pub use match_none::MatchNonePredicate;
pub use multi_predicate::MultiPredicate;
pub use predicate_interface::Predicate;
