// SPDX-License-Identifier: MIT

//! Error types for the lintrc toolkit.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lintrc operations.
#[derive(Error, Debug)]
pub enum LintrcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Ruleset resolution errors
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    // Audit errors
    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Message did not match any ignore predicate
    #[error("Message is not exempt: no ignore predicate matched")]
    NotExempt,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPredicate { pattern: String, message: String },
}

/// Ruleset resolution errors.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Unknown base ruleset: '{name}'")]
    UnknownRuleset { name: String },

    #[error("Ruleset already registered: '{name}'")]
    DuplicateRuleset { name: String },
}

/// Audit errors.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Audit found {errors} errors, {warnings} warnings")]
    IssuesFound { errors: usize, warnings: usize },
}

/// Result type alias for lintrc operations.
pub type Result<T> = std::result::Result<T, LintrcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintrcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
