use std::path::PathBuf;

use crate::common::safety::{ProtectedPathGuard, PROTECTED_NAMES, RESERVED_PATHS};
use crate::scanner::patterns::{builtin_rules, PatternMatcher, Rule};

/// Everything an engine is built from. There is no config file: the
/// defaults are compiled in and callers (the CLI, tests) derive variants.
#[derive(Debug, Clone)]
pub struct Config {
    /// Junk rules, evaluated in order
    pub rules: Vec<Rule>,

    /// Directory names never entered
    pub protected_names: Vec<String>,

    /// Locations refused outright
    pub reserved_paths: Vec<PathBuf>,

    /// Compare filenames case-sensitively
    pub case_sensitive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: builtin_rules(),
            protected_names: PROTECTED_NAMES.iter().map(|s| s.to_string()).collect(),
            reserved_paths: RESERVED_PATHS.iter().map(PathBuf::from).collect(),
            case_sensitive: true,
        }
    }
}

impl Config {
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_protected_names(mut self, names: Vec<String>) -> Self {
        self.protected_names = names;
        self
    }

    pub fn with_reserved_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.reserved_paths = paths;
        self
    }

    pub fn matcher(&self) -> PatternMatcher {
        PatternMatcher::new(self.rules.clone(), self.case_sensitive)
    }

    pub fn guard(&self) -> ProtectedPathGuard {
        ProtectedPathGuard::new(self.protected_names.clone(), self.reserved_paths.clone())
    }
}
