//! Core types for scope matching.

use crate::rule_set::RuleSet;
use std::fmt;

/// Separator between an element name and a sub-attribute name.
pub const ATTRIBUTE_SEPARATOR: char = '#';

/// Attribute name assumed for an argument given without an explicit name.
pub const IMPLICIT_ATTRIBUTE: &str = "value";

/// A single parsed configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entry {
    /// Names a whole element, covering all of its sub-attributes.
    General(String),
    /// Names one sub-attribute of an element.
    Specific { element: String, attribute: String },
}

impl Entry {
    /// Parses a raw entry, splitting on the first `#` only.
    ///
    /// Never fails: empty halves and further `#` characters are kept
    /// verbatim, so `"#"` becomes the pair `("", "")` and `"a#b#c"` becomes
    /// `("a", "b#c")`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(ATTRIBUTE_SEPARATOR) {
            None => Entry::General(raw.to_string()),
            Some((element, attribute)) => Entry::Specific {
                element: element.to_string(),
                attribute: attribute.to_string(),
            },
        }
    }

    /// Returns the element name this entry refers to.
    pub fn element(&self) -> &str {
        match self {
            Entry::General(element) => element,
            Entry::Specific { element, .. } => element,
        }
    }

    /// Returns the sub-attribute name, if this is a specific entry.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Entry::General(_) => None,
            Entry::Specific { attribute, .. } => Some(attribute),
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, Entry::General(_))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::General(element) => f.write_str(element),
            Entry::Specific { element, attribute } => {
                write!(f, "{}{}{}", element, ATTRIBUTE_SEPARATOR, attribute)
            }
        }
    }
}

/// Which of the two configuration lists an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Allow,
    Deny,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Allow => "allow",
            ListKind::Deny => "deny",
        }
    }
}

/// One side of the evaluator's configuration.
///
/// `Unconfigured` and `Configured` with an empty rule set are different
/// states: an allow-list that is configured but empty permits nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuleList {
    #[default]
    Unconfigured,
    Configured(RuleSet),
}

impl RuleList {
    /// Builds a list from an optional sequence of raw entries.
    pub fn from_entries<I, S>(entries: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match entries {
            None => RuleList::Unconfigured,
            Some(entries) => RuleList::Configured(RuleSet::from_entries(entries)),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, RuleList::Configured(_))
    }

    /// Returns the rule set, if configured.
    pub fn as_rule_set(&self) -> Option<&RuleSet> {
        match self {
            RuleList::Unconfigured => None,
            RuleList::Configured(rules) => Some(rules),
        }
    }
}

impl From<Option<RuleSet>> for RuleList {
    fn from(rules: Option<RuleSet>) -> Self {
        match rules {
            None => RuleList::Unconfigured,
            Some(rules) => RuleList::Configured(rules),
        }
    }
}

impl From<RuleSet> for RuleList {
    fn from(rules: RuleSet) -> Self {
        RuleList::Configured(rules)
    }
}
