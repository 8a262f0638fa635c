// SPDX-License-Identifier: MIT

//! emolint - Emoji-style commit message linter
//!
//! Validates commit messages written in the `:emoji:` convention, where the
//! first line looks like `:sparkles:(api) Add retry support (#42)`.
//!
//! # Features
//!
//! - **Rule Table**: A fixed set of named rules, each with a severity,
//!   an applicability condition, and a constraint value
//! - **Header Parser**: Extracts type, scope, subject, and ticket from the
//!   first line of a commit message
//! - **Lint Engine**: Applies the rule table to a parsed message and reports
//!   violations as errors or warnings
//! - **Configuration**: Rule severities and values loadable from emolint.toml
//!
//! # Example
//!
//! ```no_run
//! use emolint::config::EmolintConfig;
//! use emolint::rules::LintEngine;
//!
//! let config = EmolintConfig::load().unwrap();
//! let engine = LintEngine::new(config);
//!
//! let report = engine.lint_text(":sparkles: Add retry support").unwrap();
//! assert!(report.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod rules;

// Re-exports for convenience
pub use config::EmolintConfig;
pub use error::{EmolintError, Result};
pub use rules::LintEngine;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of emolint.
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
