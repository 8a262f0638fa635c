// SPDX-License-Identifier: MIT

//! Lint result types.

use crate::cli::args::OutputFormat;
use crate::config::{RuleId, Severity};
use console::{style, Style};

/// A single rule violation.
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// The violated rule.
    pub rule: RuleId,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Severity the rule is configured with.
    pub severity: Severity,
}

impl LintIssue {
    /// Whether this issue fails the check.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error() {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let rule_style = if self.is_error() {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            rule_style.apply_to(self.rule.as_str()),
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

/// Result of linting one commit message.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The original message.
    pub input: String,
    /// Error-level violations.
    pub errors: Vec<LintIssue>,
    /// Warning-level violations.
    pub warnings: Vec<LintIssue>,
}

impl LintReport {
    /// Create an empty report for a message.
    pub fn new(input: String) -> Self {
        Self {
            input,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an issue under its severity.
    pub fn push(&mut self, issue: LintIssue) {
        if issue.is_error() {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    /// Check if the message passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Names of all violated rules, errors first.
    pub fn violated_rules(&self) -> Vec<&'static str> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .map(|i| i.rule.as_str())
            .collect()
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
        let first_line = self.input.lines().next().unwrap_or("");
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        println!("{} {}", status, first_line);

        for error in &self.errors {
            println!("  {}", error.format());
        }
        for warning in &self.warnings {
            println!("  {}", warning.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let issue_json = |i: &LintIssue| {
            serde_json::json!({
                "rule": i.rule.as_str(),
                "message": i.message,
                "suggestion": i.suggestion,
            })
        };

        let json = serde_json::json!({
            "valid": self.is_valid(),
            "input": self.input,
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
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}
