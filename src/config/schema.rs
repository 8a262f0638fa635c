// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the rule table structures that can be loaded from emolint.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};

/// The main configuration structure for emolint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmolintConfig {
    /// The rule table, keyed by rule name.
    pub rules: BTreeMap<String, RuleSetting>,
}

impl Default for EmolintConfig {
    fn default() -> Self {
        super::default::default_config()
    }
}

impl EmolintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Look up the setting for a rule.
    pub fn rule(&self, id: RuleId) -> Option<&RuleSetting> {
        self.rules.get(id.as_str())
    }

    /// Reject configurations that name rules this linter does not know or
    /// that carry a constraint value of the wrong shape.
    pub fn validate(&self) -> Result<()> {
        for (name, setting) in &self.rules {
            let id: RuleId = name
                .parse()
                .map_err(|_| ConfigError::UnknownRule { name: name.clone() })?;
            check_value_shape(id, setting)?;
        }
        Ok(())
    }
}

/// Check that a rule's constraint has the shape the rule evaluates.
///
/// A missing value is always accepted (checks fall back to their built-in
/// defaults); a present value of the wrong shape would otherwise be silently
/// ignored at lint time.
fn check_value_shape(id: RuleId, setting: &RuleSetting) -> Result<()> {
    let invalid = |message: &str| -> Result<()> {
        Err(ConfigError::InvalidValue {
            rule: id.as_str().to_string(),
            message: message.to_string(),
        }
        .into())
    };

    match (id, &setting.value) {
        (_, None) => Ok(()),
        (RuleId::HeaderMaxLength, Some(RuleValue::Number(_))) => Ok(()),
        (RuleId::HeaderMaxLength, Some(_)) => invalid("expected a number"),
        (RuleId::TypeEnum, Some(RuleValue::List(_))) => Ok(()),
        (RuleId::TypeEnum, Some(_)) => invalid("expected a list of tokens"),
        (
            RuleId::ScopeCase | RuleId::SubjectCase | RuleId::TypeCase | RuleId::SubjectFullStop,
            Some(RuleValue::Text(_) | RuleValue::List(_)),
        ) => Ok(()),
        (
            RuleId::ScopeCase | RuleId::SubjectCase | RuleId::TypeCase | RuleId::SubjectFullStop,
            Some(_),
        ) => invalid("expected a string or a list of strings"),
        (
            RuleId::BodyLeadingBlank
            | RuleId::FooterLeadingBlank
            | RuleId::SubjectEmpty
            | RuleId::TypeEmpty,
            Some(_),
        ) => invalid("takes no value"),
    }
}

/// Severity of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is not evaluated.
    Disabled,
    /// Violations are reported but do not fail the check.
    Warning,
    /// Violations fail the check.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.pad(s)
    }
}

/// Applicability condition of a rule.
///
/// `Always` means the constraint must hold; `Never` means the stated
/// condition must never hold (e.g. subject-full-stop never ends with ".").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Always,
    Never,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Condition::Always => "always",
            Condition::Never => "never",
        };
        f.pad(s)
    }
}

/// Constraint value attached to a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// A numeric limit (e.g. header-max-length).
    Number(u64),
    /// A single string (e.g. a casing name or a forbidden suffix).
    Text(String),
    /// A set of allowed strings (e.g. type-enum).
    List(Vec<String>),
}

/// Severity, condition, and constraint for one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSetting {
    pub severity: Severity,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
}

impl RuleSetting {
    /// Shorthand for a rule with no constraint value.
    pub fn new(severity: Severity, condition: Condition) -> Self {
        Self {
            severity,
            condition,
            value: None,
        }
    }

    /// Shorthand for a rule with a constraint value.
    pub fn with_value(severity: Severity, condition: Condition, value: RuleValue) -> Self {
        Self {
            severity,
            condition,
            value: Some(value),
        }
    }

    /// Get the constraint as a number, if it is one.
    pub fn as_number(&self) -> Option<u64> {
        match self.value {
            Some(RuleValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Get the constraint as a single string, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self.value {
            Some(RuleValue::Text(ref s)) => Some(s),
            _ => None,
        }
    }

    /// Get the constraint as a string list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self.value {
            Some(RuleValue::List(ref list)) => Some(list),
            _ => None,
        }
    }

    /// Get the constraint as one-or-more strings.
    ///
    /// String-valued rules accept both forms: a single string (scope-case)
    /// or a list of alternatives (subject-case, subject-full-stop).
    pub fn text_values(&self) -> Vec<&str> {
        match self.value {
            Some(RuleValue::Text(ref s)) => vec![s.as_str()],
            Some(RuleValue::List(ref list)) => list.iter().map(|s| s.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Get the constraint as one-or-more case names.
    pub fn case_names(&self) -> Vec<&str> {
        self.text_values()
    }
}

/// Identifier of a built-in rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    TypeEnum,
    BodyLeadingBlank,
    FooterLeadingBlank,
    HeaderMaxLength,
    ScopeCase,
    SubjectCase,
    SubjectEmpty,
    SubjectFullStop,
    TypeCase,
    TypeEmpty,
}

impl RuleId {
    /// Get the string representation of the rule name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::TypeEnum => "type-enum",
            RuleId::BodyLeadingBlank => "body-leading-blank",
            RuleId::FooterLeadingBlank => "footer-leading-blank",
            RuleId::HeaderMaxLength => "header-max-length",
            RuleId::ScopeCase => "scope-case",
            RuleId::SubjectCase => "subject-case",
            RuleId::SubjectEmpty => "subject-empty",
            RuleId::SubjectFullStop => "subject-full-stop",
            RuleId::TypeCase => "type-case",
            RuleId::TypeEmpty => "type-empty",
        }
    }

    /// Get all built-in rules, in evaluation order.
    pub fn all() -> &'static [RuleId] {
        &[
            RuleId::TypeEnum,
            RuleId::BodyLeadingBlank,
            RuleId::FooterLeadingBlank,
            RuleId::HeaderMaxLength,
            RuleId::ScopeCase,
            RuleId::SubjectCase,
            RuleId::SubjectEmpty,
            RuleId::SubjectFullStop,
            RuleId::TypeCase,
            RuleId::TypeEmpty,
        ]
    }
}

impl std::str::FromStr for RuleId {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "type-enum" => Ok(RuleId::TypeEnum),
            "body-leading-blank" => Ok(RuleId::BodyLeadingBlank),
            "footer-leading-blank" => Ok(RuleId::FooterLeadingBlank),
            "header-max-length" => Ok(RuleId::HeaderMaxLength),
            "scope-case" => Ok(RuleId::ScopeCase),
            "subject-case" => Ok(RuleId::SubjectCase),
            "subject-empty" => Ok(RuleId::SubjectEmpty),
            "subject-full-stop" => Ok(RuleId::SubjectFullStop),
            "type-case" => Ok(RuleId::TypeCase),
            "type-empty" => Ok(RuleId::TypeEmpty),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EmolintConfig::default();
        assert_eq!(config.rules.len(), 10);
        assert!(config.validate().is_ok());

        let rule = config.rule(RuleId::HeaderMaxLength).unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.condition, Condition::Always);
        assert_eq!(rule.as_number(), Some(72));
    }

    #[test]
    fn test_rule_names_unique() {
        // BTreeMap keys are unique by construction; make sure every id
        // round-trips through its name.
        for &id in RuleId::all() {
            assert_eq!(id.as_str().parse::<RuleId>(), Ok(id));
        }
    }

    #[test]
    fn test_validate_rejects_unknown_rule() {
        let mut config = EmolintConfig::default();
        config.rules.insert(
            "subject-max-length".to_string(),
            RuleSetting::new(Severity::Error, Condition::Always),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_value_shape() {
        // a list where a number is required
        let mut config = EmolintConfig::default();
        config.rules.insert(
            RuleId::HeaderMaxLength.as_str().to_string(),
            RuleSetting::with_value(
                Severity::Error,
                Condition::Always,
                RuleValue::List(vec!["72".to_string()]),
            ),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("header-max-length"));

        // a number where a token list is required
        let mut config = EmolintConfig::default();
        config.rules.insert(
            RuleId::TypeEnum.as_str().to_string(),
            RuleSetting::with_value(Severity::Error, Condition::Always, RuleValue::Number(3)),
        );
        assert!(config.validate().is_err());

        // a value on a rule that takes none
        let mut config = EmolintConfig::default();
        config.rules.insert(
            RuleId::SubjectEmpty.as_str().to_string(),
            RuleSetting::with_value(
                Severity::Error,
                Condition::Never,
                RuleValue::Text("x".to_string()),
            ),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_missing_value() {
        let mut config = EmolintConfig::default();
        config.rules.insert(
            RuleId::HeaderMaxLength.as_str().to_string(),
            RuleSetting::new(Severity::Error, Condition::Always),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:<9}", Severity::Error), "error    ");
        assert_eq!(format!("{:<7}", Condition::Never), "never  ");
    }

    #[test]
    fn test_case_names() {
        let single = RuleSetting::with_value(
            Severity::Error,
            Condition::Always,
            RuleValue::Text("lower-case".to_string()),
        );
        assert_eq!(single.case_names(), vec!["lower-case"]);

        let multi = RuleSetting::with_value(
            Severity::Error,
            Condition::Always,
            RuleValue::List(vec!["sentence-case".to_string()]),
        );
        assert_eq!(multi.case_names(), vec!["sentence-case"]);
    }

    #[test]
    fn test_config_serialization() {
        let config = EmolintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("header-max-length"));
        assert!(toml_str.contains(":sparkles:"));
    }
}
