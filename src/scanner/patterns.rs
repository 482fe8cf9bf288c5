//! Junk filename rules and the matcher that evaluates them.

use glob::{MatchOptions, Pattern, PatternError};

/// How a [`Rule`] compares against a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Whole filename equality
    ExactName,
    /// Filename ends with the literal
    Suffix,
    /// Filename starts with the literal
    Prefix,
    /// Shell glob anchored to the whole filename (`*` and `?`)
    Glob(Pattern),
}

/// A single immutable junk-file rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub pattern: String,
}

impl Rule {
    pub fn exact(name: &str) -> Self {
        Self {
            kind: RuleKind::ExactName,
            pattern: name.to_string(),
        }
    }

    pub fn suffix(literal: &str) -> Self {
        Self {
            kind: RuleKind::Suffix,
            pattern: literal.to_string(),
        }
    }

    pub fn prefix(literal: &str) -> Self {
        Self {
            kind: RuleKind::Prefix,
            pattern: literal.to_string(),
        }
    }

    pub fn glob(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            kind: RuleKind::Glob(Pattern::new(pattern)?),
            pattern: pattern.to_string(),
        })
    }

    fn matches(&self, filename: &str, case_sensitive: bool) -> bool {
        if let RuleKind::Glob(pattern) = &self.kind {
            let options = MatchOptions {
                case_sensitive,
                require_literal_separator: false,
                require_literal_leading_dot: false,
            };
            return pattern.matches_with(filename, options);
        }

        let (name, literal) = if case_sensitive {
            (filename.to_string(), self.pattern.clone())
        } else {
            (filename.to_lowercase(), self.pattern.to_lowercase())
        };

        match self.kind {
            RuleKind::ExactName => name == literal,
            RuleKind::Suffix => name.ends_with(&literal),
            RuleKind::Prefix => name.starts_with(&literal),
            RuleKind::Glob(_) => false,
        }
    }
}

/// OS metadata files, matched by whole name
pub const JUNK_NAMES: &[&str] = &[".DS_Store", "Thumbs.db", "ehthumbs.db", "Desktop.ini"];

/// The built-in rule list, in evaluation order
pub fn builtin_rules() -> Vec<Rule> {
    let mut rules: Vec<Rule> = JUNK_NAMES.iter().map(|n| Rule::exact(n)).collect();
    // AppleDouble metadata left on non-HFS volumes
    rules.push(Rule::prefix("._"));
    // Editor backups (notes.txt~)
    rules.push(Rule::suffix("~"));
    // Vim swap files (.notes.txt.swp, .swo, ...)
    rules.push(Rule::glob(".*.sw?").expect("built-in swap glob is valid"));
    rules
}

/// Decides whether a filename is junk
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    rules: Vec<Rule>,
    case_sensitive: bool,
}

impl PatternMatcher {
    pub fn new(rules: Vec<Rule>, case_sensitive: bool) -> Self {
        Self {
            rules,
            case_sensitive,
        }
    }

    /// Returns the first rule that matches `filename`, if any.
    /// `filename` is a bare name, never a path.
    pub fn matching_rule(&self, filename: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|r| r.matches(filename, self.case_sensitive))
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.matching_rule(filename).is_some()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new(builtin_rules(), true)
    }
}
