//! Attribute scope matching
//!
//! Decides whether an (element, attribute) pair is in scope for a
//! source-analysis checker, given an optional allow-list and an optional
//! deny-list of `Element` and `Element#attribute` entries.
//!
//! Specific entries beat general ones, deny beats allow at equal
//! specificity, and configuring any allow-list (even an empty one) turns
//! the default from "in scope" to "out of scope".
//!
//! ```
//! use attribute_scope::PolicyEvaluator;
//!
//! let evaluator = PolicyEvaluator::new(Some(["foo", "baz#1"]), Some(["foo#2"]));
//! assert!(evaluator.matches("foo", "1"));
//! assert!(!evaluator.matches("foo", "2"));
//! assert!(evaluator.matches("baz", "1"));
//! assert!(!evaluator.matches("baz", "2"));
//! ```

pub mod config;
pub mod decision;
pub mod error;
pub mod evaluator;
pub mod fingerprint;
pub mod pack;
pub mod presets;
pub mod rule_set;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::ScopeConfig;
pub use decision::{Decision, MatchDecision, MatchStep};
pub use error::{Result, ScopeError};
pub use evaluator::PolicyEvaluator;
pub use pack::ScopePack;
pub use rule_set::RuleSet;

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::config::ScopeConfig;
    pub use crate::decision::{Decision, MatchDecision, MatchStep};
    pub use crate::error::{Result, ScopeError};
    pub use crate::evaluator::PolicyEvaluator;
    pub use crate::pack::ScopePack;
    pub use crate::rule_set::RuleSet;
    pub use crate::types::*;
}
