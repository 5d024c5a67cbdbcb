//! Parsed, queryable form of one raw entry list.

use crate::types::Entry;
use std::collections::{HashMap, HashSet};

/// An immutable index over one list of entries.
///
/// Bare entries land in the general names; `element#attribute` entries are
/// indexed by element so lookups need no allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    general: HashSet<String>,
    specific: HashMap<String, HashSet<String>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rule set from raw entries. Duplicates collapse; nothing is
    /// rejected or normalized.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Self::new();
        for raw in entries {
            rules.insert(Entry::parse(raw.as_ref()));
        }
        tracing::debug!(
            general = rules.general.len(),
            specific = rules.specific_count(),
            "built rule set"
        );
        rules
    }

    fn insert(&mut self, entry: Entry) {
        match entry {
            Entry::General(element) => {
                self.general.insert(element);
            }
            Entry::Specific { element, attribute } => {
                self.specific.entry(element).or_default().insert(attribute);
            }
        }
    }

    /// Returns true if `element` appears as a bare entry.
    pub fn contains_general(&self, element: &str) -> bool {
        self.general.contains(element)
    }

    /// Returns true if `element#attribute` appears as an entry.
    pub fn contains_specific(&self, element: &str, attribute: &str) -> bool {
        self.specific
            .get(element)
            .is_some_and(|attributes| attributes.contains(attribute))
    }

    /// Element names that appear as bare entries.
    pub fn general_names(&self) -> impl Iterator<Item = &str> {
        self.general.iter().map(String::as_str)
    }

    /// `(element, attribute)` pairs that appear as qualified entries.
    pub fn specific_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.specific.iter().flat_map(|(element, attributes)| {
            attributes
                .iter()
                .map(move |attribute| (element.as_str(), attribute.as_str()))
        })
    }

    /// All distinct entries, sorted.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .general_names()
            .map(|element| Entry::General(element.to_string()))
            .chain(self.specific_pairs().map(|(element, attribute)| Entry::Specific {
                element: element.to_string(),
                attribute: attribute.to_string(),
            }))
            .collect();
        entries.sort();
        entries
    }

    fn specific_count(&self) -> usize {
        self.specific.values().map(HashSet::len).sum()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.general.len() + self.specific_count()
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.specific.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RuleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
