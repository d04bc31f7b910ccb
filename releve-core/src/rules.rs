//! Ordered classification rules: label pattern → transaction type.
//!
//! Patterns are matched from the start of the normalized label and the first
//! matching rule wins, so specific patterns must come before catch-alls.
//! Named groups understood by the normalizer:
//!
//! * `text`: the part of the label kept as the short label
//! * `dd`, `mm`, `yy`, `HH`, `MM`: operation date and time parts
//!
//! Any other group, such as a `category` group, is ignored: the category
//! always comes from the two-space split of the label, so it stays a prefix
//! of the normalized label.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transaction::TransactionType;

/// A compiled, prefix-anchored rule
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    regex: Regex,
    kind: TransactionType,
}

impl Rule {
    pub fn new(pattern: &str, kind: TransactionType) -> Result<Self> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            kind,
        })
    }

    /// The pattern as written, without the anchor
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }
}

/// Serializable form of a rule, as found in config files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSpec {
    pub pattern: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl RuleSpec {
    pub fn compile(&self) -> Result<Rule> {
        Rule::new(&self.pattern, self.kind)
    }
}

/// Immutable ordered list of rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compile `(pattern, type)` pairs, keeping their order.
    pub fn from_patterns<'a, I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, TransactionType)>,
    {
        patterns
            .into_iter()
            .map(|(pattern, kind)| Rule::new(pattern, kind))
            .collect()
    }

    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        specs.iter().map(RuleSpec::compile).collect()
    }

    /// Rules of `self` first, then those of `other`.
    pub fn chain(mut self, other: RuleSet) -> RuleSet {
        self.rules.extend(other.rules);
        self
    }

    /// First rule matching `text`, with its captures.
    pub fn first_match<'s, 't>(&'s self, text: &'t str) -> Option<(&'s Rule, Captures<'t>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.captures(text).map(|caps| (rule, caps)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
