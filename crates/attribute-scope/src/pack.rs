//! Named collections of scope configurations, one per checker.

use crate::config::ScopeConfig;
use crate::error::{Result, ScopeError};
use crate::evaluator::PolicyEvaluator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pack of scope configurations keyed by checker name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopePack {
    /// Pack identifier.
    pub id: String,

    /// Pack version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Pack name.
    pub name: String,

    /// Pack description.
    #[serde(default)]
    pub description: Option<String>,

    /// Scopes in this pack, by checker name.
    #[serde(default)]
    pub scopes: BTreeMap<String, ScopeConfig>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl ScopePack {
    /// Creates a new, empty scope pack.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: default_version(),
            name: name.into(),
            description: None,
            scopes: BTreeMap::new(),
        }
    }

    /// Adds or replaces the scope for a checker.
    pub fn with_scope(mut self, checker: impl Into<String>, config: ScopeConfig) -> Self {
        self.scopes.insert(checker.into(), config);
        self
    }

    /// Parses a scope pack from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let pack: ScopePack = serde_yaml::from_str(yaml)?;
        pack.validate()?;
        Ok(pack)
    }

    /// Parses a scope pack from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let pack: ScopePack =
            serde_json::from_str(json).map_err(|e| ScopeError::ParseError(e.to_string()))?;
        pack.validate()?;
        Ok(pack)
    }

    /// Serializes the pack to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ScopeError::SerializationError(e.to_string()))
    }

    /// Validates the pack.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(ScopeError::ValidationError("Pack ID is required".to_string()));
        }

        if self.name.is_empty() {
            return Err(ScopeError::ValidationError("Pack name is required".to_string()));
        }

        if self.scopes.keys().any(String::is_empty) {
            return Err(ScopeError::ValidationError(format!(
                "Empty checker name in pack '{}'",
                self.id
            )));
        }

        Ok(())
    }

    /// Returns the configuration for a checker, if any.
    pub fn scope(&self, checker: &str) -> Option<&ScopeConfig> {
        self.scopes.get(checker)
    }

    /// Builds the evaluator for a checker.
    pub fn evaluator_for(&self, checker: &str) -> Result<PolicyEvaluator> {
        self.scope(checker)
            .map(ScopeConfig::build)
            .ok_or_else(|| ScopeError::NotFound(checker.to_string()))
    }

    /// Builds the evaluator for a checker, or an unrestricted one if the
    /// pack has no entry for it.
    pub fn evaluator_or_default(&self, checker: &str) -> PolicyEvaluator {
        self.scope(checker)
            .map(ScopeConfig::build)
            .unwrap_or_else(PolicyEvaluator::unrestricted)
    }
}
