//! Allow/deny evaluation of (element, attribute) pairs.

use crate::decision::{MatchDecision, MatchStep};
use crate::rule_set::RuleSet;
use crate::types::{RuleList, IMPLICIT_ATTRIBUTE};

/// Decides whether (element, attribute) pairs are in scope.
///
/// Evaluation order, first applicable step wins:
///
/// 1. specific deny (`element#attribute` on the deny-list)
/// 2. specific allow
/// 3. general deny (`element` on the deny-list)
/// 4. general allow
/// 5. default: allow when no allow-list is configured, deny otherwise
///
/// The evaluator is immutable, so one instance can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyEvaluator {
    allow: RuleList,
    deny: RuleList,
}

impl PolicyEvaluator {
    /// Creates an evaluator from optional raw allow and deny lists.
    ///
    /// `None` means the list is not configured. `Some` of an empty list is
    /// different for the allow side: it restricts everything.
    pub fn new<A, D, S, T>(allow: Option<A>, deny: Option<D>) -> Self
    where
        A: IntoIterator<Item = S>,
        D: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self::from_lists(RuleList::from_entries(allow), RuleList::from_entries(deny))
    }

    /// Creates an evaluator from already parsed lists.
    pub fn from_lists(allow: RuleList, deny: RuleList) -> Self {
        tracing::debug!(
            allow_configured = allow.is_configured(),
            allow_entries = allow.as_rule_set().map_or(0, RuleSet::len),
            deny_configured = deny.is_configured(),
            deny_entries = deny.as_rule_set().map_or(0, RuleSet::len),
            "created scope evaluator"
        );
        Self { allow, deny }
    }

    /// An evaluator with neither list configured; everything matches.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn allow_list(&self) -> &RuleList {
        &self.allow
    }

    pub fn deny_list(&self) -> &RuleList {
        &self.deny
    }

    /// Returns true if `element#attribute` is in scope.
    pub fn matches(&self, element: &str, attribute: &str) -> bool {
        self.step(element, attribute).decision().into()
    }

    /// Like [`matches`](Self::matches), treating an unnamed argument as the
    /// implicit `value` attribute.
    pub fn matches_argument(&self, element: &str, attribute: Option<&str>) -> bool {
        self.matches(element, attribute.unwrap_or(IMPLICIT_ATTRIBUTE))
    }

    /// Evaluates a query and reports which step decided it.
    pub fn explain(&self, element: &str, attribute: &str) -> MatchDecision {
        let step = self.step(element, attribute);
        tracing::trace!(element, attribute, ?step, "evaluated scope");
        MatchDecision::new(step, element, attribute)
    }

    /// Filters `attributes` down to those in scope for `element`, keeping
    /// their order.
    pub fn matching_attributes<'a, I>(
        &'a self,
        element: &'a str,
        attributes: I,
    ) -> impl Iterator<Item = &'a str> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        attributes
            .into_iter()
            .filter(move |attribute| self.matches(element, attribute))
    }

    /// Stable fingerprint of this configuration.
    pub fn fingerprint(&self) -> String {
        crate::fingerprint::fingerprint_lists(&self.allow, &self.deny)
    }

    fn step(&self, element: &str, attribute: &str) -> MatchStep {
        let allow = self.allow.as_rule_set();
        let deny = self.deny.as_rule_set();

        if deny.is_some_and(|rules| rules.contains_specific(element, attribute)) {
            return MatchStep::SpecificDeny;
        }
        if allow.is_some_and(|rules| rules.contains_specific(element, attribute)) {
            return MatchStep::SpecificAllow;
        }
        if deny.is_some_and(|rules| rules.contains_general(element)) {
            return MatchStep::GeneralDeny;
        }
        if allow.is_some_and(|rules| rules.contains_general(element)) {
            return MatchStep::GeneralAllow;
        }

        match allow {
            None => MatchStep::DefaultUnrestricted,
            Some(_) => MatchStep::DefaultRestricted,
        }
    }
}
