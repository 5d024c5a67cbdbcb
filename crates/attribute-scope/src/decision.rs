//! Match decision types.

use crate::types::ListKind;
use serde::{Deserialize, Serialize};

/// Whether an (element, attribute) pair is in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Deny,
}

impl From<ListKind> for Decision {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Allow => Decision::Allow,
            ListKind::Deny => Decision::Deny,
        }
    }
}

impl From<Decision> for bool {
    fn from(decision: Decision) -> Self {
        decision == Decision::Allow
    }
}

/// The evaluation step that produced a decision, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStep {
    SpecificDeny,
    SpecificAllow,
    GeneralDeny,
    GeneralAllow,
    /// No allow-list configured and nothing matched.
    DefaultUnrestricted,
    /// An allow-list is configured and nothing matched.
    DefaultRestricted,
}

impl MatchStep {
    pub fn decision(&self) -> Decision {
        match self.list() {
            Some(list) => list.into(),
            None if *self == MatchStep::DefaultUnrestricted => Decision::Allow,
            None => Decision::Deny,
        }
    }

    /// Returns the list whose entry fired, or `None` for the default steps.
    pub fn list(&self) -> Option<ListKind> {
        match self {
            MatchStep::SpecificDeny | MatchStep::GeneralDeny => Some(ListKind::Deny),
            MatchStep::SpecificAllow | MatchStep::GeneralAllow => Some(ListKind::Allow),
            MatchStep::DefaultUnrestricted | MatchStep::DefaultRestricted => None,
        }
    }

    pub fn is_default(&self) -> bool {
        self.list().is_none()
    }
}

/// An explained decision for one (element, attribute) query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDecision {
    /// The final decision.
    pub decision: Decision,

    /// The step that decided.
    pub step: MatchStep,

    /// The queried element.
    pub element: String,

    /// The queried sub-attribute.
    pub attribute: String,
}

impl MatchDecision {
    pub fn new(step: MatchStep, element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            decision: step.decision(),
            step,
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Human-readable reason for the decision.
    pub fn reason(&self) -> String {
        match self.step {
            MatchStep::SpecificDeny => {
                format!("'{}#{}' is on the deny-list", self.element, self.attribute)
            }
            MatchStep::SpecificAllow => {
                format!("'{}#{}' is on the allow-list", self.element, self.attribute)
            }
            MatchStep::GeneralDeny => format!("'{}' is on the deny-list", self.element),
            MatchStep::GeneralAllow => format!("'{}' is on the allow-list", self.element),
            MatchStep::DefaultUnrestricted => {
                "No matching entries and no allow-list - default allow".to_string()
            }
            MatchStep::DefaultRestricted => {
                "No matching entries and an allow-list is configured - default deny".to_string()
            }
        }
    }

    /// Returns true if the decision is allow.
    pub fn is_allowed(&self) -> bool {
        matches!(self.decision, Decision::Allow)
    }

    /// Returns true if the decision is deny.
    pub fn is_denied(&self) -> bool {
        matches!(self.decision, Decision::Deny)
    }

    /// Whether this is a default decision (no matching entries).
    pub fn is_default(&self) -> bool {
        self.step.is_default()
    }
}
