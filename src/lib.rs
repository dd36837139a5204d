// SPDX-License-Identifier: MIT

//! lintrc - Commit Message Lint Configuration Toolkit
//!
//! Builds, audits and resolves the configuration documents a
//! commit-message linter consumes.
//!
//! # Features
//!
//! - **Configuration documents**: `extends` + rule tuples + ignore
//!   predicates, in the linter's native shape
//! - **Base rulesets**: builtin conventional-commits ruleset with a
//!   registry for custom ones
//! - **Resolution**: flatten a document against its base rulesets
//! - **Audit**: catch authoring mistakes before the linter runs
//! - **Presets**: the shipped standard, relaxed and automation variants
//!
//! # Example
//!
//! ```
//! use lintrc::config::presets;
//! use lintrc::resolve::resolve;
//! use lintrc::ruleset::RulesetRegistry;
//!
//! let registry = RulesetRegistry::builtin();
//! let resolved = resolve(&presets::automation(), &registry).unwrap();
//!
//! assert!(resolved.is_ignored("Brew cask update v1.2.3"));
//! assert!(!resolved.is_ignored("feat: add widget"));
//! ```

// Module declarations
pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod resolve;
pub mod ruleset;

// Re-exports for convenience
pub use config::ConfigDocument;
pub use error::{LintrcError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of lintrc.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
