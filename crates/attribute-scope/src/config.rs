//! Scope configuration loading.

use crate::error::{Result, ScopeError};
use crate::evaluator::PolicyEvaluator;
use crate::presets::SORTED_LISTING_EXCLUDES;
use crate::types::ATTRIBUTE_SEPARATOR;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Element and attribute names accepted by strict validation.
const NAME_PATTERN: &str = r"^[^\s#]+$";

fn name_regex() -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is valid"))
}

/// Supported configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detects format from file extension.
    pub fn from_extension(path: &str) -> Option<Self> {
        if path.ends_with(".yaml") || path.ends_with(".yml") {
            Some(ConfigFormat::Yaml)
        } else if path.ends_with(".json") {
            Some(ConfigFormat::Json)
        } else {
            None
        }
    }

    /// Detects format from content.
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            ConfigFormat::Json
        } else {
            ConfigFormat::Yaml
        }
    }
}

/// The raw allow/deny lists for one checker.
///
/// A missing key means the list is not configured; an explicit empty list
/// is configured. For `includes` the two behave differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeConfig {
    /// If present, only the listed elements or attributes are in scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,

    /// The listed elements or attributes are out of scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<String>>,
}

impl ScopeConfig {
    /// Creates a configuration with neither list set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allow-list.
    pub fn with_includes<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the deny-list.
    pub fn with_excludes<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Adds built-in deny entries on top of whatever the user configured.
    pub fn with_default_excludes<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes
            .get_or_insert_with(Vec::new)
            .extend(entries.into_iter().map(Into::into));
        self
    }

    /// Applies the default exclusions of the sorted-listing checker.
    pub fn sorted_listing(self) -> Self {
        self.with_default_excludes(SORTED_LISTING_EXCLUDES.iter().copied())
    }

    /// Parses a configuration, auto-detecting format.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with_format(content, ConfigFormat::detect(content))
    }

    /// Parses a configuration with the specified format.
    pub fn parse_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Yaml => Self::from_yaml(content),
            ConfigFormat::Json => Self::from_json(content),
        }
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ScopeError::ParseError(e.to_string()))
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ScopeError::SerializationError(e.to_string()))
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects entries that the evaluator would accept but that are almost
    /// certainly mistakes: empty names, more than one `#`, or whitespace.
    ///
    /// Building an evaluator never requires this.
    pub fn validate_strict(&self) -> Result<()> {
        let entries = self.includes.iter().chain(self.excludes.iter()).flatten();
        for entry in entries {
            if let Some(reason) = entry_problem(entry) {
                tracing::warn!(entry = %entry, reason, "rejected scope entry");
                return Err(ScopeError::InvalidEntry {
                    entry: entry.clone(),
                    reason: reason.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Builds the evaluator for this configuration.
    pub fn build(&self) -> PolicyEvaluator {
        PolicyEvaluator::new(self.includes.as_ref(), self.excludes.as_ref())
    }
}

fn entry_problem(entry: &str) -> Option<&'static str> {
    let name = name_regex();
    let (element, attribute) = match entry.split_once(ATTRIBUTE_SEPARATOR) {
        None => (entry, None),
        Some((element, attribute)) => (element, Some(attribute)),
    };

    if attribute.is_some_and(|attribute| attribute.contains(ATTRIBUTE_SEPARATOR)) {
        return Some("more than one '#' separator");
    }
    if !name.is_match(element) {
        return Some(if element.is_empty() {
            "missing element name"
        } else {
            "element name contains whitespace"
        });
    }
    match attribute {
        Some("") => Some("missing attribute name"),
        Some(attribute) if !name.is_match(attribute) => Some("attribute name contains whitespace"),
        _ => None,
    }
}

/// Parses multiple configurations from a multi-document YAML string.
pub fn parse_configs_yaml(content: &str) -> Result<Vec<ScopeConfig>> {
    let mut configs = Vec::new();

    for document in serde_yaml::Deserializer::from_str(content) {
        configs.push(ScopeConfig::deserialize(document)?);
    }

    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::detect(r#"{"includes": []}"#), ConfigFormat::Json);
        assert_eq!(ConfigFormat::detect("includes: []"), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_extension("scope.yml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("scope.json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("scope.toml"), None);
    }

    #[test]
    fn test_absent_vs_empty_yaml() {
        let absent = ScopeConfig::from_yaml("excludes: [Foo]").unwrap();
        assert_eq!(absent.includes, None);

        let empty = ScopeConfig::from_yaml("includes: []\nexcludes: [Foo]").unwrap();
        assert_eq!(empty.includes, Some(vec![]));

        assert!(absent.build().matches("Bar", "x"));
        assert!(!empty.build().matches("Bar", "x"));
    }

    #[test]
    fn test_parse_json() {
        let config = ScopeConfig::parse(r#"{"includes": ["Foo", "Bar#baz"]}"#).unwrap();
        assert_eq!(config.includes.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(config.excludes, None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            ScopeConfig::from_yaml("include: [Foo]"),
            Err(ScopeError::ParseError(_))
        ));
        assert!(ScopeConfig::from_json(r#"{"include": []}"#).is_err());
    }

    #[test]
    fn test_yaml_roundtrip_keeps_absence() {
        let config = ScopeConfig::new().with_excludes(["Foo#bar"]);
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.contains("includes"));
        assert_eq!(ScopeConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_default_excludes_create_list() {
        let config = ScopeConfig::new().with_default_excludes(["Foo#bar"]);
        assert_eq!(config.excludes, Some(vec!["Foo#bar".to_string()]));
        assert_eq!(config.includes, None);
    }

    #[test]
    fn test_default_excludes_extend_list() {
        let config = ScopeConfig::new()
            .with_excludes(["Foo"])
            .with_default_excludes(["Bar#baz"]);
        assert_eq!(config.excludes.map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_sorted_listing_defaults() {
        let evaluator = ScopeConfig::new().sorted_listing().build();
        assert!(!evaluator.matches("javax.xml.bind.annotation.XmlType", "propOrder"));
        assert!(evaluator.matches("javax.xml.bind.annotation.XmlType", "name"));
        assert!(evaluator.matches("com.example.Other", "value"));
    }

    #[test]
    fn test_sorted_listing_keeps_user_includes() {
        let evaluator = ScopeConfig::new()
            .with_includes(["picocli.CommandLine.Option"])
            .sorted_listing()
            .build();
        assert!(!evaluator.matches("picocli.CommandLine.Option", "names"));
        assert!(evaluator.matches("picocli.CommandLine.Option", "description"));
        assert!(!evaluator.matches("com.example.Other", "value"));
    }

    #[test]
    fn test_validate_strict_accepts_well_formed() {
        let config = ScopeConfig::new()
            .with_includes(["com.example.Foo", "com.example.Bar#value"])
            .with_excludes(["com.example.Baz#names"]);
        assert!(config.validate_strict().is_ok());
    }

    #[test]
    fn test_validate_strict_rejects_degenerate() {
        let cases = [
            ("#", "missing element name"),
            ("#S", "missing element name"),
            ("E#", "missing attribute name"),
            ("a#b#c", "more than one '#' separator"),
            (" E", "element name contains whitespace"),
            ("E# S", "attribute name contains whitespace"),
            ("", "missing element name"),
        ];

        for (raw, expected) in cases {
            let config = ScopeConfig::new().with_excludes([raw]);
            match config.validate_strict() {
                Err(ScopeError::InvalidEntry { entry, reason }) => {
                    assert_eq!(entry, raw);
                    assert_eq!(reason, expected, "entry {:?}", raw);
                }
                other => panic!("expected InvalidEntry for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_lenient_build_accepts_degenerate() {
        let evaluator = ScopeConfig::new().with_excludes(["E#", "a#b#c"]).build();
        assert!(!evaluator.matches("E", ""));
        assert!(!evaluator.matches("a", "b#c"));
        assert!(evaluator.matches("E", "x"));
    }

    #[test]
    fn test_parse_multiple() {
        let yaml = r#"
includes: [Foo]
---
excludes: [Bar#baz]
"#;
        let configs = parse_configs_yaml(yaml).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[1].includes, None);
    }

    #[test]
    fn test_parse_multiple_dashes_inside_quoted_scalar() {
        let yaml = "includes:\n  - \"Foo\n---bar\"\n";
        let configs = parse_configs_yaml(yaml).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].includes, Some(vec!["Foo ---bar".to_string()]));
    }

    #[test]
    fn test_parse_multiple_with_leading_marker() {
        let yaml = "---\nincludes: [Foo]\n---\nexcludes: [Bar]\n";
        let configs = parse_configs_yaml(yaml).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].includes, Some(vec!["Foo".to_string()]));
        assert_eq!(configs[1].excludes, Some(vec!["Bar".to_string()]));
    }

    #[test]
    fn test_parse_multiple_rejects_unknown_field() {
        let yaml = "includes: [Foo]\n---\ninclude: [Bar]\n";
        assert!(matches!(parse_configs_yaml(yaml), Err(ScopeError::ParseError(_))));
    }

    #[test]
    fn test_validate_strict_repeatable() {
        let config = ScopeConfig::new().with_excludes(["E#"]);
        assert!(config.validate_strict().is_err());
        assert!(config.validate_strict().is_err());
        assert!(ScopeConfig::new().with_excludes(["E#a"]).validate_strict().is_ok());
    }
}
