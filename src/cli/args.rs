// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// emolint - Emoji-style commit message linter
///
/// Checks commit messages of the form `:sparkles:(api) Add retry support (#42)`
/// against a configurable rule table.
#[derive(Parser, Debug)]
#[command(name = "emolint")]
#[command(version)]
#[command(about = "Emoji-style commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
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
    /// Lint a commit message (default command)
    Check(CheckArgs),

    /// Print the effective rule table
    Rules,

    /// Initialize emolint configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Commit message to lint (reads stdin when neither this nor --file is given)
    pub message: Option<String>,

    /// Read the commit message from a file (e.g. .git/COMMIT_EDITMSG)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}
