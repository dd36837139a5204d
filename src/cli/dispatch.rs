// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;

use crate::audit::Auditor;
use crate::config::{presets, ConfigDocument};
use crate::error::{AuditError, ConfigError, LintrcError, Result};
use crate::resolve::resolve;
use crate::ruleset::RulesetRegistry;

use super::args::{Cli, Commands, ConfigPreset, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Show(args) => run_show(&cli, args),
        Commands::Audit(args) => run_audit(&cli, args),
        Commands::Ignored(args) => run_ignored(&cli, args),
        Commands::Init(args) => run_init(&cli, args),
        Commands::Rulesets => run_rulesets(&cli),
        Commands::Version => run_version(),
    }
}

/// Load the configuration document, honoring `--config`.
fn load_document(cli: &Cli) -> Result<ConfigDocument> {
    if let Some(config_path) = &cli.config {
        ConfigDocument::load_from(config_path)
    } else {
        ConfigDocument::load()
    }
}

/// Run the show command.
fn run_show(cli: &Cli, args: super::args::ShowArgs) -> Result<()> {
    tracing::debug!("Running show command with args: {:?}", args);

    let document = load_document(cli)?;

    if args.raw {
        match cli.format {
            Some(OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(&document).unwrap_or_default());
            }
            _ => print!("{}", presets::render(&document, "as written")?),
        }
        return Ok(());
    }

    let registry = RulesetRegistry::builtin();
    let resolved = resolve(&document, &registry)?;

    if let Some(OutputFormat::Json) = cli.format {
        let rules: serde_json::Map<String, serde_json::Value> = resolved
            .rules()
            .map(|(name, rule)| {
                (
                    name.to_string(),
                    serde_json::to_value(rule).unwrap_or_default(),
                )
            })
            .collect();
        let json = serde_json::json!({
            "extends": document.extends,
            "rules": rules,
            "ignores": resolved.ignores().iter().collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        return Ok(());
    }

    println!(
        "{} ({} rules)",
        style("Resolved configuration").bold(),
        resolved.rule_count()
    );
    for (name, rule) in resolved.rules() {
        let param = rule
            .param
            .as_ref()
            .map(|p| format!(" {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}, {}{}]",
            style(name).cyan(),
            rule.severity,
            rule.applicability,
            param
        );
    }

    if !resolved.ignores().is_empty() {
        println!("{}", style("Ignores").bold());
        for predicate in resolved.ignores().iter() {
            println!("  {}", predicate);
        }
    }

    Ok(())
}

/// Run the audit command.
fn run_audit(cli: &Cli, args: super::args::AuditArgs) -> Result<()> {
    tracing::debug!("Running audit command with args: {:?}", args);

    let auditor = Auditor::default();
    let report = match args.file.as_deref().or(cli.config.as_deref()) {
        Some(path) => auditor.audit_file(path)?,
        None => auditor.audit(&load_document(cli)?),
    };

    report.print(cli.format);

    if !report.is_clean() || (args.strict && !report.warnings.is_empty()) {
        return Err(LintrcError::Audit(AuditError::IssuesFound {
            errors: report.errors.len(),
            warnings: report.warnings.len(),
        }));
    }

    if !matches!(cli.format, Some(OutputFormat::Json)) {
        println!("{} {}", style("✓").green().bold(), report.summary());
    }
    Ok(())
}

/// Run the ignored command.
fn run_ignored(cli: &Cli, args: super::args::IgnoredArgs) -> Result<()> {
    tracing::debug!("Running ignored command");

    let document = load_document(cli)?;
    let registry = RulesetRegistry::builtin();
    let resolved = resolve(&document, &registry)?;

    match resolved.ignores().matching_predicate(&args.message) {
        Some(predicate) => {
            println!(
                "{} exempt from linting ({})",
                style("✓").green().bold(),
                predicate
            );
            Ok(())
        }
        None => {
            println!("{} subject to linting", style("✗").red().bold());
            Err(LintrcError::NotExempt)
        }
    }
}

/// Run the init command.
fn run_init(_cli: &Cli, args: super::args::InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("lintrc.toml");

    if config_path.exists() && !args.force {
        return Err(LintrcError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    let (document, label) = match args.preset {
        Some(ConfigPreset::Relaxed) => (presets::relaxed(), "relaxed"),
        Some(ConfigPreset::Automation) => (presets::automation(), "automation"),
        Some(ConfigPreset::Standard) | None => (presets::standard(), "standard"),
    };

    std::fs::write(config_path, presets::render(&document, label)?)?;

    println!("{} Created lintrc.toml ({})", style("✓").green().bold(), label);
    Ok(())
}

/// Run the rulesets command.
fn run_rulesets(cli: &Cli) -> Result<()> {
    let registry = RulesetRegistry::builtin();

    if let Some(OutputFormat::Json) = cli.format {
        let rulesets: Vec<_> = registry
            .iter()
            .map(|r| {
                serde_json::json!({
                    "name": r.name,
                    "rules": r.len(),
                    "ignores": r.ignores.len(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rulesets).unwrap_or_default()
        );
        return Ok(());
    }

    for ruleset in registry.iter() {
        println!("{} ({} rules)", style(&ruleset.name).cyan(), ruleset.len());
    }
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("lintrc {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
