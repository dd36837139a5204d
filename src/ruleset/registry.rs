// SPDX-License-Identifier: MIT

//! Ruleset registry.
//!
//! Maps base-ruleset identifiers (the strings a configuration document
//! names in `extends`) to rulesets. Ships the builtin rulesets; library
//! users can register their own before resolution.

use std::collections::BTreeMap;

use crate::config::Rule;
use crate::error::{ResolveError, Result};
use crate::ignore::IgnorePredicate;

/// A named base ruleset.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    /// Identifier used in `extends`.
    pub name: String,
    /// The rules this ruleset contributes.
    pub rules: BTreeMap<String, Rule>,
    /// Ignore predicates this ruleset contributes.
    pub ignores: Vec<IgnorePredicate>,
}

impl Ruleset {
    /// Empty ruleset with the given identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: BTreeMap::new(),
            ignores: Vec::new(),
        }
    }

    /// Add a rule.
    pub fn with_rule(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    /// Add an ignore predicate.
    pub fn with_ignore(mut self, predicate: IgnorePredicate) -> Self {
        self.ignores.push(predicate);
        self
    }

    /// Number of rules in this ruleset.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether this ruleset has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Registry of base rulesets, keyed by identifier.
#[derive(Debug, Clone)]
pub struct RulesetRegistry {
    rulesets: BTreeMap<String, Ruleset>,
}

impl RulesetRegistry {
    /// Empty registry.
    pub fn empty() -> Self {
        Self {
            rulesets: BTreeMap::new(),
        }
    }

    /// Registry pre-populated with the builtin rulesets.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        // Builtin names cannot collide with each other.
        registry
            .register(super::conventional())
            .unwrap_or_else(|_| unreachable!("builtin rulesets are distinct"));
        registry
    }

    /// Register a ruleset under its identifier.
    pub fn register(&mut self, ruleset: Ruleset) -> Result<()> {
        if self.rulesets.contains_key(&ruleset.name) {
            return Err(ResolveError::DuplicateRuleset {
                name: ruleset.name.clone(),
            }
            .into());
        }
        tracing::debug!("Registered ruleset '{}'", ruleset.name);
        self.rulesets.insert(ruleset.name.clone(), ruleset);
        Ok(())
    }

    /// Look up a ruleset by identifier.
    pub fn get(&self, name: &str) -> Option<&Ruleset> {
        self.rulesets.get(name)
    }

    /// Whether an identifier is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rulesets.contains_key(name)
    }

    /// Iterate over registered rulesets, ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = &Ruleset> {
        self.rulesets.values()
    }
}

impl Default for RulesetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
