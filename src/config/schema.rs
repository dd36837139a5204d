// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the configuration document shape consumed by commit-message
//! linters: a list of base rulesets to extend, a rule table, and an
//! optional chain of ignore predicates. Rules serialize in the linter's
//! native tuple shape, e.g. `"header-max-length" = [2, "always", 150]`.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::ignore::IgnorePredicate;

/// How a violated rule is reported by the linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Rule is disabled (level 0).
    Off,
    /// Violations are reported but do not fail the lint (level 1).
    Warning,
    /// Violations fail the lint (level 2).
    #[default]
    Error,
}

impl Severity {
    /// Numeric level as consumed by the linter.
    pub fn level(self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Parse a numeric level.
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", s)
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelVisitor;

        impl<'de> Visitor<'de> for LevelVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a severity level 0, 1, or 2")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
                Severity::from_level(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
                if v < 0 {
                    return Err(E::invalid_value(de::Unexpected::Signed(v), &self));
                }
                self.visit_u64(v as u64)
            }
        }

        deserializer.deserialize_u64(LevelVisitor)
    }
}

/// Whether a rule is enforced positively or negatively.
///
/// `Always` means the condition must hold; `Never` means it must not
/// (e.g. `subject-full-stop` at `never` forbids a trailing period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        };
        write!(f, "{}", s)
    }
}

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleParam {
    /// Numeric bound (e.g. a maximum length).
    Int(u64),
    /// String value (e.g. the full stop character).
    Str(String),
    /// List of allowed values (e.g. commit types for `type-enum`).
    List(Vec<String>),
}

impl RuleParam {
    /// The numeric bound, if this parameter is one.
    pub fn as_int(&self) -> Option<u64> {
        match self {
            RuleParam::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The value list, if this parameter is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RuleParam::List(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for RuleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleParam::Int(n) => write!(f, "{}", n),
            RuleParam::Str(s) => write!(f, "{:?}", s),
            RuleParam::List(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// A single rule descriptor: severity, applicability and an optional
/// rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub severity: Severity,
    pub applicability: Applicability,
    pub param: Option<RuleParam>,
}

impl Rule {
    /// Rule with no parameter.
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            param: None,
        }
    }

    /// Rule with a numeric bound.
    pub fn with_max(severity: Severity, applicability: Applicability, max: u64) -> Self {
        Self {
            severity,
            applicability,
            param: Some(RuleParam::Int(max)),
        }
    }

    /// Rule with a string parameter.
    pub fn with_value(
        severity: Severity,
        applicability: Applicability,
        value: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            applicability,
            param: Some(RuleParam::Str(value.into())),
        }
    }

    /// Rule with a value-list parameter.
    pub fn with_values<I, S>(severity: Severity, applicability: Applicability, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            severity,
            applicability,
            param: Some(RuleParam::List(
                values.into_iter().map(Into::into).collect(),
            )),
        }
    }

    /// Whether this rule is disabled.
    pub fn is_disabled(&self) -> bool {
        self.severity == Severity::Off
    }
}

// Rules travel in the linter's tuple shape: [severity, applicability, param?].
impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.param.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(ref param) = self.param {
            seq.serialize_element(param)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleVisitor;

        impl<'de> Visitor<'de> for RuleVisitor {
            type Value = Rule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [severity, applicability, param?] tuple")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Rule, A::Error> {
                let severity = seq
                    .next_element::<Severity>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let applicability = seq
                    .next_element::<Applicability>()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let param = seq.next_element::<RuleParam>()?;

                // Trailing elements are a shape error, not silently dropped.
                if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }

                Ok(Rule {
                    severity,
                    applicability,
                    param,
                })
            }
        }

        deserializer.deserialize_seq(RuleVisitor)
    }
}

/// A commit-lint configuration document.
///
/// Immutable once parsed; the linter reads it once at lint time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    /// Base rulesets to inherit from, in order. Later entries override
    /// earlier ones for conflicting rule names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Rule overrides, keyed by rule name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, Rule>,

    /// Ignore predicates. A message matching any predicate is exempt
    /// from linting entirely.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<IgnorePredicate>,
}

impl ConfigDocument {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Look up a rule override by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        assert_eq!(Severity::Off.level(), 0);
        assert_eq!(Severity::Warning.level(), 1);
        assert_eq!(Severity::Error.level(), 2);
        assert_eq!(Severity::from_level(2), Some(Severity::Error));
        assert_eq!(Severity::from_level(3), None);
    }

    #[test]
    fn test_rule_tuple_roundtrip_json() {
        let rule = Rule::with_max(Severity::Error, Applicability::Always, 150);
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"[2,"always",150]"#);

        let parsed: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn test_rule_without_param() {
        let rule = Rule::new(Severity::Warning, Applicability::Never);
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"[1,"never"]"#);

        let parsed: Rule = serde_json::from_str(&json).unwrap();
        assert!(parsed.param.is_none());
    }

    #[test]
    fn test_rule_list_param() {
        let json = r#"[2, "always", ["feat", "fix"]]"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(
            rule.param.unwrap().as_list().unwrap(),
            &["feat".to_string(), "fix".to_string()]
        );
    }

    #[test]
    fn test_rule_rejects_bad_severity() {
        assert!(serde_json::from_str::<Rule>(r#"[5, "always", 150]"#).is_err());
        assert!(serde_json::from_str::<Rule>(r#"[-1, "always"]"#).is_err());
    }

    #[test]
    fn test_rule_rejects_trailing_elements() {
        assert!(serde_json::from_str::<Rule>(r#"[2, "always", 150, "extra"]"#).is_err());
    }

    #[test]
    fn test_document_from_toml() {
        let toml = r#"
extends = ["conventional"]

[rules]
"header-max-length" = [2, "always", 150]
"#;
        let doc: ConfigDocument = toml::from_str(toml).unwrap();
        assert_eq!(doc.extends, vec!["conventional"]);
        assert_eq!(
            doc.rule("header-max-length").unwrap().param,
            Some(RuleParam::Int(150))
        );
        assert!(doc.ignores.is_empty());
    }

    #[test]
    fn test_document_toml_roundtrip() {
        let toml = r#"
extends = ["conventional"]

[rules]
"header-max-length" = [2, "always", 200]

[[ignores]]
prefix = "Brew cask update"
"#;
        let doc: ConfigDocument = toml::from_str(toml).unwrap();
        let rendered = toml::to_string(&doc).unwrap();
        let reparsed: ConfigDocument = toml::from_str(&rendered).unwrap();
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn test_document_json_shape() {
        let json = r#"{
            "extends": ["conventional"],
            "rules": { "header-max-length": [2, "always", 200] }
        }"#;
        let doc: ConfigDocument = serde_json::from_str(json).unwrap();
        assert_eq!(
            doc.rule("header-max-length").unwrap().severity,
            Severity::Error
        );
    }
}
