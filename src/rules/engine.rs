// SPDX-License-Identifier: MIT

//! Lint engine.

use crate::config::EmolintConfig;
use crate::error::Result;
use crate::message::Message;

use super::builtin::apply_rules;
use super::validator::LintReport;

/// Applies the configured rule table to commit messages.
#[derive(Debug, Clone)]
pub struct LintEngine {
    config: EmolintConfig,
}

impl LintEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: EmolintConfig) -> Self {
        Self { config }
    }

    /// Access the rule table the engine runs with.
    pub fn config(&self) -> &EmolintConfig {
        &self.config
    }

    /// Lint a parsed message.
    pub fn lint(&self, message: &Message) -> LintReport {
        let mut report = LintReport::new(message.raw.clone());
        for issue in apply_rules(message, &self.config) {
            report.push(issue);
        }
        report
    }

    /// Parse and lint a message string.
    pub fn lint_text(&self, text: &str) -> Result<LintReport> {
        let message = Message::parse(text)?;
        Ok(self.lint(&message))
    }
}
