// SPDX-License-Identifier: MIT

//! The conventional-commits base ruleset.
//!
//! Mirrors the rule table of the upstream conventional configuration:
//! commit types, case and emptiness checks on type and subject, and
//! length bounds on the header, body and footer.

use crate::config::{Applicability, Rule, Severity};

use super::registry::Ruleset;

/// Commit types accepted by `type-enum`.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Default maximum header length.
pub const DEFAULT_HEADER_MAX_LENGTH: u64 = 100;

/// Default maximum line length for body and footer.
pub const DEFAULT_LINE_MAX_LENGTH: u64 = 100;

/// Build the `conventional` base ruleset.
pub fn conventional() -> Ruleset {
    Ruleset::new("conventional")
        .with_rule(
            "body-leading-blank",
            Rule::new(Severity::Warning, Applicability::Always),
        )
        .with_rule(
            "body-max-line-length",
            Rule::with_max(
                Severity::Error,
                Applicability::Always,
                DEFAULT_LINE_MAX_LENGTH,
            ),
        )
        .with_rule(
            "footer-leading-blank",
            Rule::new(Severity::Warning, Applicability::Always),
        )
        .with_rule(
            "footer-max-line-length",
            Rule::with_max(
                Severity::Error,
                Applicability::Always,
                DEFAULT_LINE_MAX_LENGTH,
            ),
        )
        .with_rule(
            "header-max-length",
            Rule::with_max(
                Severity::Error,
                Applicability::Always,
                DEFAULT_HEADER_MAX_LENGTH,
            ),
        )
        .with_rule(
            "header-trim",
            Rule::new(Severity::Error, Applicability::Always),
        )
        .with_rule(
            "subject-case",
            Rule::with_values(
                Severity::Error,
                Applicability::Never,
                ["sentence-case", "start-case", "pascal-case", "upper-case"],
            ),
        )
        .with_rule(
            "subject-empty",
            Rule::new(Severity::Error, Applicability::Never),
        )
        .with_rule(
            "subject-full-stop",
            Rule::with_value(Severity::Error, Applicability::Never, "."),
        )
        .with_rule(
            "type-case",
            Rule::with_value(Severity::Error, Applicability::Always, "lower-case"),
        )
        .with_rule(
            "type-empty",
            Rule::new(Severity::Error, Applicability::Never),
        )
        .with_rule(
            "type-enum",
            Rule::with_values(
                Severity::Error,
                Applicability::Always,
                CONVENTIONAL_TYPES.iter().copied(),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleParam;

    #[test]
    fn test_conventional_header_max_length() {
        let ruleset = conventional();
        let rule = ruleset.rules.get("header-max-length").unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.param, Some(RuleParam::Int(100)));
    }

    #[test]
    fn test_conventional_type_enum() {
        let ruleset = conventional();
        let rule = ruleset.rules.get("type-enum").unwrap();
        let types = rule.param.as_ref().unwrap().as_list().unwrap();
        assert!(types.contains(&"feat".to_string()));
        assert!(types.contains(&"fix".to_string()));
        assert_eq!(types.len(), CONVENTIONAL_TYPES.len());
    }

    #[test]
    fn test_conventional_has_no_ignores() {
        assert!(conventional().ignores.is_empty());
    }

    #[test]
    fn test_conventional_subject_full_stop_is_never() {
        let ruleset = conventional();
        let rule = ruleset.rules.get("subject-full-stop").unwrap();
        assert_eq!(rule.applicability, Applicability::Never);
    }
}
