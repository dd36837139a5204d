// SPDX-License-Identifier: MIT

//! Ignore predicates.
//!
//! Declarative predicates over the raw commit message. A message that
//! matches any predicate in a chain is exempt from linting entirely,
//! which is how auto-generated commits (version bumps, merge commits)
//! are kept out of the linter's way.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A declarative ignore predicate.
///
/// Predicates are pure: evaluation reads the message and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnorePredicate {
    /// Message starts with a fixed literal prefix.
    Prefix(String),
    /// Message equals a literal exactly.
    Exact(String),
    /// Message matches a regular expression.
    Pattern(String),
}

impl IgnorePredicate {
    /// Evaluate this predicate against a raw commit message.
    ///
    /// `Pattern` predicates compile on each call; use [`IgnoreChain`]
    /// when evaluating repeatedly.
    pub fn matches(&self, message: &str) -> Result<bool> {
        Ok(self.compile()?.matches(message))
    }

    fn compile(&self) -> Result<CompiledPredicate> {
        match self {
            IgnorePredicate::Prefix(prefix) => Ok(CompiledPredicate::Prefix(prefix.clone())),
            IgnorePredicate::Exact(literal) => Ok(CompiledPredicate::Exact(literal.clone())),
            IgnorePredicate::Pattern(pattern) => {
                let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPredicate {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
                Ok(CompiledPredicate::Pattern(regex))
            }
        }
    }
}

impl std::fmt::Display for IgnorePredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnorePredicate::Prefix(p) => write!(f, "prefix {:?}", p),
            IgnorePredicate::Exact(e) => write!(f, "exact {:?}", e),
            IgnorePredicate::Pattern(p) => write!(f, "pattern {:?}", p),
        }
    }
}

#[derive(Debug, Clone)]
enum CompiledPredicate {
    Prefix(String),
    Exact(String),
    Pattern(Regex),
}

impl CompiledPredicate {
    fn matches(&self, message: &str) -> bool {
        match self {
            CompiledPredicate::Prefix(prefix) => message.starts_with(prefix.as_str()),
            CompiledPredicate::Exact(literal) => message == literal,
            CompiledPredicate::Pattern(regex) => regex.is_match(message),
        }
    }
}

/// An ordered chain of compiled ignore predicates.
///
/// Compiling up front means invalid patterns surface as configuration
/// errors instead of failing at evaluation time.
#[derive(Debug, Clone, Default)]
pub struct IgnoreChain {
    predicates: Vec<(IgnorePredicate, CompiledPredicate)>,
}

impl IgnoreChain {
    /// Compile a chain from declarative predicates, preserving order.
    pub fn compile<'a, I>(predicates: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a IgnorePredicate>,
    {
        let mut compiled = Vec::new();
        for predicate in predicates {
            compiled.push((predicate.clone(), predicate.compile()?));
        }
        Ok(Self {
            predicates: compiled,
        })
    }

    /// Whether a message is exempt from linting (OR over all predicates).
    pub fn is_ignored(&self, message: &str) -> bool {
        self.predicates.iter().any(|(_, c)| c.matches(message))
    }

    /// The predicate that exempts this message, if any.
    pub fn matching_predicate(&self, message: &str) -> Option<&IgnorePredicate> {
        self.predicates
            .iter()
            .find(|(_, c)| c.matches(message))
            .map(|(p, _)| p)
    }

    /// Number of predicates in the chain.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Iterate over the declarative predicates, in order.
    pub fn iter(&self) -> impl Iterator<Item = &IgnorePredicate> {
        self.predicates.iter().map(|(p, _)| p)
    }
}
