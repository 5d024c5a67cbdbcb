//! Deterministic fingerprints of scope configurations.
//!
//! Two configurations with the same distinct entries produce the same
//! fingerprint regardless of entry order or duplicates. An unconfigured list
//! and an empty list fingerprint differently.

use crate::rule_set::RuleSet;
use crate::types::{ListKind, RuleList};
use sha2::{Digest, Sha256};

/// Prefix for configuration fingerprints.
pub const FINGERPRINT_PREFIX: &str = "s:";

/// Fingerprints an allow/deny pair.
pub fn fingerprint_lists(allow: &RuleList, deny: &RuleList) -> String {
    let mut hasher = Sha256::new();
    update_list(&mut hasher, ListKind::Allow, allow);
    update_list(&mut hasher, ListKind::Deny, deny);
    format!("{}{}", FINGERPRINT_PREFIX, hex::encode(hasher.finalize()))
}

/// Fingerprints a single rule set.
pub fn fingerprint_rule_set(rules: &RuleSet) -> String {
    let mut hasher = Sha256::new();
    update_entries(&mut hasher, rules);
    format!("{}{}", FINGERPRINT_PREFIX, hex::encode(hasher.finalize()))
}

fn update_list(hasher: &mut Sha256, kind: ListKind, list: &RuleList) {
    hasher.update(kind.as_str().as_bytes());
    match list.as_rule_set() {
        None => hasher.update(b"\0unconfigured\0"),
        Some(rules) => {
            hasher.update(b"\0configured\0");
            update_entries(hasher, rules);
        }
    }
}

// Entries are length-prefixed so no choice of names can collide.
fn update_entries(hasher: &mut Sha256, rules: &RuleSet) {
    for entry in rules.entries() {
        let rendered = entry.to_string();
        hasher.update((rendered.len() as u64).to_le_bytes());
        hasher.update(rendered.as_bytes());
    }
}
