// SPDX-License-Identifier: MIT

//! Named base rulesets and their registry.

pub mod conventional;
pub mod registry;

pub use conventional::conventional;
pub use registry::{Ruleset, RulesetRegistry};
