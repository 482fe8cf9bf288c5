pub mod patterns;
pub mod walker;

pub use patterns::{builtin_rules, PatternMatcher, Rule, RuleKind};
pub use walker::{Candidate, Walk, WalkEvent, Walker};
