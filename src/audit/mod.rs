// SPDX-License-Identifier: MIT

//! Configuration audit.
//!
//! Checks a configuration document for static-authoring mistakes
//! before the external linter ever sees it.

pub mod checks;
pub mod report;

pub use report::{AuditIssue, AuditReport};

use std::path::Path;

use crate::config::ConfigDocument;
use crate::error::Result;
use crate::ruleset::RulesetRegistry;

/// Auditor bound to a ruleset registry.
#[derive(Debug, Clone)]
pub struct Auditor {
    registry: RulesetRegistry,
}

impl Auditor {
    /// Create an auditor over the given registry.
    pub fn new(registry: RulesetRegistry) -> Self {
        Self { registry }
    }

    /// Audit a configuration document.
    pub fn audit(&self, document: &ConfigDocument) -> AuditReport {
        let issues = checks::apply_checks(document, &self.registry);
        AuditReport::from_issues(None, issues)
    }

    /// Load and audit a configuration file.
    pub fn audit_file(&self, path: &Path) -> Result<AuditReport> {
        let document = ConfigDocument::load_from(path)?;
        let issues = checks::apply_checks(&document, &self.registry);
        Ok(AuditReport::from_issues(Some(path.to_path_buf()), issues))
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(RulesetRegistry::builtin())
    }
}
