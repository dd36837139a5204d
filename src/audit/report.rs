// SPDX-License-Identifier: MIT

//! Audit report types.

use crate::cli::args::OutputFormat;
use console::{style, Style};
use std::path::PathBuf;

/// A single audit issue.
#[derive(Debug, Clone)]
pub struct AuditIssue {
    /// Issue code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
    /// Rule the issue concerns, if any.
    pub rule: Option<String>,
}

impl AuditIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.code),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of auditing a configuration document.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Path of the audited file, if it came from one.
    pub path: Option<PathBuf>,
    /// Audit errors.
    pub errors: Vec<AuditIssue>,
    /// Audit warnings.
    pub warnings: Vec<AuditIssue>,
}

impl AuditReport {
    /// Create an empty report.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Build a report from a flat issue list.
    pub fn from_issues(path: Option<PathBuf>, issues: Vec<AuditIssue>) -> Self {
        let mut report = Self::new(path);
        for issue in issues {
            if issue.is_error {
                report.errors.push(issue);
            } else {
                report.warnings.push(issue);
            }
        }
        report
    }

    /// Check if the audit passed (no errors).
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        if let Some(ref path) = self.path {
            let status = if self.is_clean() {
                style("✓").green().bold()
            } else {
                style("✗").red().bold()
            };
            println!("{} {}", status, style(path.display()).cyan());
        }

        for error in &self.errors {
            println!("  {}", error.format());
        }

        for warning in &self.warnings {
            println!("  {}", warning.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let issue_json = |issue: &AuditIssue| {
            serde_json::json!({
                "code": issue.code,
                "message": issue.message,
                "suggestion": issue.suggestion,
                "rule": issue.rule,
            })
        };

        let json = serde_json::json!({
            "clean": self.is_clean(),
            "path": self.path.as_ref().map(|p| p.display().to_string()),
            "errors": self.errors.iter().map(issue_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(issue_json).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            if self.warnings.is_empty() {
                "Clean".to_string()
            } else {
                format!("Clean ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Malformed ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}
