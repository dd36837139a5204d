// SPDX-License-Identifier: MIT

//! Configuration resolution.
//!
//! Flattens a configuration document against a ruleset registry: base
//! rulesets named in `extends` are merged in order (later entries win
//! for conflicting rule names), then the document's own rules are
//! applied as final overrides. Ignore predicates are concatenated,
//! inherited chains first.

use std::collections::BTreeMap;

use crate::config::{ConfigDocument, Rule};
use crate::error::{ResolveError, Result};
use crate::ignore::IgnoreChain;
use crate::ruleset::RulesetRegistry;

/// A fully resolved configuration: a flat rule table plus the combined
/// ignore chain. Immutable once built.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    rules: BTreeMap<String, Rule>,
    ignores: IgnoreChain,
}

impl ResolvedConfig {
    /// Look up an effective rule by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Iterate over effective rules, ordered by rule name.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Number of effective rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The combined ignore chain.
    pub fn ignores(&self) -> &IgnoreChain {
        &self.ignores
    }

    /// Whether a raw commit message is exempt from linting.
    pub fn is_ignored(&self, message: &str) -> bool {
        self.ignores.is_ignored(message)
    }
}

/// Resolve a configuration document against a registry.
///
/// Unknown identifiers in `extends` and invalid ignore patterns are
/// errors; a disabled override keeps its entry at level 0 rather than
/// dropping it, so the linter still sees the rule as explicitly off.
pub fn resolve(document: &ConfigDocument, registry: &RulesetRegistry) -> Result<ResolvedConfig> {
    let mut rules: BTreeMap<String, Rule> = BTreeMap::new();
    let mut predicates = Vec::new();

    for name in &document.extends {
        let ruleset = registry
            .get(name)
            .ok_or_else(|| ResolveError::UnknownRuleset { name: name.clone() })?;
        tracing::debug!(
            "Merging ruleset '{}' ({} rules)",
            ruleset.name,
            ruleset.len()
        );
        for (rule_name, rule) in &ruleset.rules {
            rules.insert(rule_name.clone(), rule.clone());
        }
        predicates.extend(ruleset.ignores.iter().cloned());
    }

    // Document overrides come last.
    for (rule_name, rule) in &document.rules {
        rules.insert(rule_name.clone(), rule.clone());
    }
    predicates.extend(document.ignores.iter().cloned());

    let ignores = IgnoreChain::compile(&predicates)?;

    Ok(ResolvedConfig { rules, ignores })
}
