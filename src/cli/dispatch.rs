// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use console::style;

use crate::config::EmolintConfig;
use crate::error::{ConfigError, EmolintError, MessageError, Result, ResultExt};
use crate::rules::LintEngine;

use super::args::{CheckArgs, Cli, Commands, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        EmolintConfig::load_from(config_path)?
    } else {
        EmolintConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Rules => run_rules(&cli, &config),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &EmolintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let text = read_message(&args)?;

    let engine = LintEngine::new(config.clone());
    let report = engine.lint_text(&text)?;
    report.print(cli.format);

    let fail = !report.is_valid() || (args.strict && !report.warnings.is_empty());
    if fail {
        Err(EmolintError::LintFailed {
            errors: report.errors.len(),
            warnings: report.warnings.len(),
        })
    } else {
        Ok(())
    }
}

/// Resolve the message text from the argument, a file, or stdin.
fn read_message(args: &CheckArgs) -> Result<String> {
    if let Some(ref message) = args.message {
        return Ok(message.clone());
    }

    if let Some(ref path) = args.file {
        return std::fs::read_to_string(path).map_err(|e| {
            EmolintError::Message(MessageError::ReadFailed {
                source_name: path.display().to_string(),
                message: e.to_string(),
            })
        });
    }

    tracing::debug!("Reading commit message from stdin");
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text).map_err(|e| {
        EmolintError::Message(MessageError::ReadFailed {
            source_name: "stdin".to_string(),
            message: e.to_string(),
        })
    })?;
    Ok(text)
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &EmolintConfig) -> Result<()> {
    tracing::debug!("Running rules command");

    if cli.format == Some(OutputFormat::Json) {
        let json = serde_json::to_string_pretty(&config.rules).unwrap_or_default();
        println!("{}", json);
        return Ok(());
    }

    for (name, rule) in &config.rules {
        let value = match rule.value {
            Some(ref v) => match v {
                crate::config::RuleValue::Number(n) => n.to_string(),
                crate::config::RuleValue::Text(ref s) => format!("{:?}", s),
                crate::config::RuleValue::List(ref list) => {
                    if list.len() > 4 {
                        format!("[{} entries]", list.len())
                    } else {
                        format!("{:?}", list)
                    }
                }
            },
            None => "-".to_string(),
        };
        // pad before styling so ANSI escapes don't count toward the width
        println!(
            "{} {:<9} {:<7} {}",
            style(format!("{:<22}", name)).cyan(),
            rule.severity,
            rule.condition,
            value
        );
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("emolint.toml");

    if config_path.exists() && !args.force {
        return Err(EmolintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    let content = crate::config::default::example_config();
    std::fs::write(config_path, content).context("Failed to write emolint.toml")?;

    println!("{} Created emolint.toml", style("✓").green().bold());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("emolint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
