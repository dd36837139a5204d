// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lintrc - Commit message lint configuration toolkit
///
/// Inspect, audit and generate the configuration documents a
/// commit-message linter consumes.
#[derive(Parser, Debug)]
#[command(name = "lintrc")]
#[command(version)]
#[command(about = "Commit message lint configuration toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to show if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the resolved configuration (default command)
    Show(ShowArgs),

    /// Audit a configuration document for authoring mistakes
    Audit(AuditArgs),

    /// Check whether a message is exempt from linting
    Ignored(IgnoredArgs),

    /// Initialize a lintrc configuration file
    Init(InitArgs),

    /// List registered base rulesets
    Rulesets,

    /// Print version information
    Version,
}

/// Arguments for the show command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ShowArgs {
    /// Print the document as written instead of the resolved rules
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the audit command.
#[derive(Parser, Debug, Default, Clone)]
pub struct AuditArgs {
    /// Configuration file to audit (default: discovered config)
    pub file: Option<PathBuf>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the ignored command.
#[derive(Parser, Debug, Clone)]
pub struct IgnoredArgs {
    /// The raw commit message to test
    pub message: String,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long, value_enum)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Conventional rules, headers up to 150 characters
    Standard,
    /// Conventional rules, headers up to 200 characters
    Relaxed,
    /// Relaxed bounds plus exemptions for auto-generated commits
    Automation,
}

impl Cli {
    /// Get the effective command, defaulting to Show if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Show(ShowArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let args = Cli::parse_from(["lintrc", "show", "--raw"]);
        if let Some(Commands::Show(show_args)) = args.command {
            assert!(show_args.raw);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn test_parse_audit() {
        let args = Cli::parse_from(["lintrc", "audit", "lintrc.toml", "--strict"]);
        if let Some(Commands::Audit(audit_args)) = args.command {
            assert_eq!(audit_args.file, Some(PathBuf::from("lintrc.toml")));
            assert!(audit_args.strict);
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_parse_ignored() {
        let args = Cli::parse_from(["lintrc", "ignored", "Brew cask update v1.2.3"]);
        if let Some(Commands::Ignored(ignored_args)) = args.command {
            assert_eq!(ignored_args.message, "Brew cask update v1.2.3");
        } else {
            panic!("Expected Ignored command");
        }
    }

    #[test]
    fn test_parse_init_preset() {
        let args = Cli::parse_from(["lintrc", "init", "--preset", "automation", "--force"]);
        if let Some(Commands::Init(init_args)) = args.command {
            assert_eq!(init_args.preset, Some(ConfigPreset::Automation));
            assert!(init_args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["lintrc", "--debug", "--format", "json", "rulesets"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["lintrc"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Show(_)));
    }
}
