// SPDX-License-Identifier: MIT

//! Shipped configuration presets.
//!
//! Three variants, all extending the conventional base ruleset. They
//! differ only in the header length bound and, for `automation`, an
//! ignore predicate for auto-generated version-bump commits.

use crate::config::{Applicability, ConfigDocument, Rule, Severity};
use crate::error::Result;
use crate::ignore::IgnorePredicate;

/// Header bound of the standard preset.
pub const STANDARD_HEADER_MAX_LENGTH: u64 = 150;

/// Header bound of the relaxed and automation presets.
pub const RELAXED_HEADER_MAX_LENGTH: u64 = 200;

/// Prefix of auto-generated commits exempted by the automation preset.
pub const AUTOMATION_IGNORE_PREFIX: &str = "Brew cask update";

fn base(header_max_length: u64) -> ConfigDocument {
    let mut doc = ConfigDocument {
        extends: vec!["conventional".to_string()],
        ..Default::default()
    };
    doc.rules.insert(
        "header-max-length".to_string(),
        Rule::with_max(Severity::Error, Applicability::Always, header_max_length),
    );
    doc
}

/// Standard preset: conventional rules, headers up to 150 characters.
pub fn standard() -> ConfigDocument {
    base(STANDARD_HEADER_MAX_LENGTH)
}

/// Relaxed preset: conventional rules, headers up to 200 characters.
pub fn relaxed() -> ConfigDocument {
    base(RELAXED_HEADER_MAX_LENGTH)
}

/// Automation preset: relaxed bounds plus an exemption for
/// auto-generated version-bump commits.
pub fn automation() -> ConfigDocument {
    let mut doc = base(RELAXED_HEADER_MAX_LENGTH);
    doc.ignores
        .push(IgnorePredicate::Prefix(AUTOMATION_IGNORE_PREFIX.to_string()));
    doc
}

/// Render a preset as a TOML configuration file.
pub fn render(doc: &ConfigDocument, label: &str) -> Result<String> {
    let body = toml::to_string(doc).map_err(|e| crate::error::ConfigError::ParseError {
        message: format!("Failed to render configuration: {}", e),
    })?;
    Ok(format!("# lintrc configuration ({})\n\n{}", label, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{loader, RuleParam};

    fn header_bound(doc: &ConfigDocument) -> u64 {
        doc.rule("header-max-length")
            .and_then(|r| r.param.as_ref())
            .and_then(RuleParam::as_int)
            .unwrap()
    }

    #[test]
    fn test_preset_header_bounds() {
        assert_eq!(header_bound(&standard()), 150);
        assert_eq!(header_bound(&relaxed()), 200);
        assert_eq!(header_bound(&automation()), 200);
    }

    #[test]
    fn test_presets_extend_conventional_only() {
        for doc in [standard(), relaxed(), automation()] {
            assert_eq!(doc.extends, vec!["conventional"]);
        }
    }

    #[test]
    fn test_only_automation_has_ignores() {
        assert!(standard().ignores.is_empty());
        assert!(relaxed().ignores.is_empty());
        assert_eq!(automation().ignores.len(), 1);
    }

    #[test]
    fn test_automation_ignore_prefix() {
        let doc = automation();
        let predicate = &doc.ignores[0];
        assert!(predicate.matches("Brew cask update v1.2.3").unwrap());
        assert!(!predicate.matches("feat: add widget").unwrap());
    }

    #[test]
    fn test_presets_render_and_reparse() {
        for (doc, label) in [
            (standard(), "standard"),
            (relaxed(), "relaxed"),
            (automation(), "automation"),
        ] {
            let rendered = render(&doc, label).unwrap();
            let reparsed = loader::parse_config(&rendered).unwrap();
            assert_eq!(doc, reparsed);
        }
    }

    #[test]
    fn test_presets_serialize_to_json() {
        for doc in [standard(), relaxed(), automation()] {
            let json = serde_json::to_string(&doc).unwrap();
            let reparsed: ConfigDocument = serde_json::from_str(&json).unwrap();
            assert_eq!(doc, reparsed);
        }
    }
}
