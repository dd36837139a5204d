// SPDX-License-Identifier: MIT

//! Built-in audit checks.
//!
//! Static-authoring checks over a configuration document. A malformed
//! document is the only failure intrinsic to this artifact; everything
//! the linter itself enforces stays out of scope here.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{ConfigDocument, Rule, RuleParam};
use crate::ignore::IgnorePredicate;
use crate::ruleset::RulesetRegistry;

use super::report::AuditIssue;

lazy_static! {
    /// Rule names are kebab-case, e.g. "header-max-length".
    static ref RULE_NAME_REGEX: Regex =
        Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap();
}

/// Rules whose parameter must be a non-empty value list.
const LIST_PARAM_RULES: &[&str] = &["type-enum", "scope-enum", "subject-case"];

/// Apply all built-in checks to a configuration document.
pub fn apply_checks(document: &ConfigDocument, registry: &RulesetRegistry) -> Vec<AuditIssue> {
    let mut issues = Vec::new();

    check_extends(document, registry, &mut issues);

    for (name, rule) in &document.rules {
        check_rule_name(name, &mut issues);
        check_max_length_param(name, rule, &mut issues);
        check_list_param(name, rule, &mut issues);
        check_disabled_with_param(name, rule, &mut issues);
    }

    for predicate in &document.ignores {
        check_predicate(predicate, &mut issues);
    }

    issues
}

/// Every `extends` entry must resolve; an empty list is suspicious.
fn check_extends(
    document: &ConfigDocument,
    registry: &RulesetRegistry,
    issues: &mut Vec<AuditIssue>,
) {
    if document.extends.is_empty() {
        issues.push(AuditIssue {
            code: "extends-empty".to_string(),
            message: "Document extends no base ruleset".to_string(),
            suggestion: Some("Add `extends = [\"conventional\"]`".to_string()),
            is_error: false,
            rule: None,
        });
    }

    for name in &document.extends {
        if !registry.contains(name) {
            issues.push(AuditIssue {
                code: "extends-unknown".to_string(),
                message: format!("Unknown base ruleset: '{}'", name),
                suggestion: Some(format!(
                    "Registered rulesets: {}",
                    registry
                        .iter()
                        .map(|r| r.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
                is_error: true,
                rule: None,
            });
        }
    }
}

/// Rule names follow the linter's kebab-case convention.
fn check_rule_name(name: &str, issues: &mut Vec<AuditIssue>) {
    if !RULE_NAME_REGEX.is_match(name) {
        issues.push(AuditIssue {
            code: "rule-name-format".to_string(),
            message: format!("Rule name '{}' is not kebab-case", name),
            suggestion: Some("Use lowercase words separated by hyphens".to_string()),
            is_error: false,
            rule: Some(name.to_string()),
        });
    }
}

/// `*-max-length` rules need a positive integer bound.
fn check_max_length_param(name: &str, rule: &Rule, issues: &mut Vec<AuditIssue>) {
    if !name.ends_with("-max-length") || rule.is_disabled() {
        return;
    }

    match rule.param.as_ref().and_then(RuleParam::as_int) {
        Some(0) => issues.push(AuditIssue {
            code: "param-not-positive".to_string(),
            message: format!("Rule '{}' has a zero length bound", name),
            suggestion: Some("Use a positive maximum length".to_string()),
            is_error: true,
            rule: Some(name.to_string()),
        }),
        Some(_) => {}
        None => issues.push(AuditIssue {
            code: "param-not-integer".to_string(),
            message: format!("Rule '{}' requires an integer length bound", name),
            suggestion: Some(format!("Write `\"{}\" = [2, \"always\", 150]`", name)),
            is_error: true,
            rule: Some(name.to_string()),
        }),
    }
}

/// Enum-valued rules need a non-empty value list.
fn check_list_param(name: &str, rule: &Rule, issues: &mut Vec<AuditIssue>) {
    if !LIST_PARAM_RULES.contains(&name) || rule.is_disabled() {
        return;
    }

    match rule.param.as_ref().and_then(RuleParam::as_list) {
        Some([]) => issues.push(AuditIssue {
            code: "param-empty-list".to_string(),
            message: format!("Rule '{}' has an empty value list", name),
            suggestion: Some("List at least one allowed value".to_string()),
            is_error: true,
            rule: Some(name.to_string()),
        }),
        Some(_) => {}
        None => issues.push(AuditIssue {
            code: "param-not-list".to_string(),
            message: format!("Rule '{}' requires a list of allowed values", name),
            suggestion: Some(format!(
                "Write `\"{}\" = [2, \"always\", [\"feat\", \"fix\"]]`",
                name
            )),
            is_error: true,
            rule: Some(name.to_string()),
        }),
    }
}

/// A parameter on a disabled rule is dead configuration.
fn check_disabled_with_param(name: &str, rule: &Rule, issues: &mut Vec<AuditIssue>) {
    if rule.is_disabled() && rule.param.is_some() {
        issues.push(AuditIssue {
            code: "disabled-with-param".to_string(),
            message: format!("Rule '{}' is disabled but carries a parameter", name),
            suggestion: Some("Drop the parameter or re-enable the rule".to_string()),
            is_error: false,
            rule: Some(name.to_string()),
        });
    }
}

/// Regex predicates must compile.
fn check_predicate(predicate: &IgnorePredicate, issues: &mut Vec<AuditIssue>) {
    if let IgnorePredicate::Pattern(pattern) = predicate {
        if let Err(e) = Regex::new(pattern) {
            issues.push(AuditIssue {
                code: "ignore-bad-pattern".to_string(),
                message: format!("Ignore pattern '{}' does not compile: {}", pattern, e),
                suggestion: None,
                is_error: true,
                rule: None,
            });
        }
    }
}
