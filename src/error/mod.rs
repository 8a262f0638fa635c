// SPDX-License-Identifier: MIT

//! Error types for emolint.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for emolint operations.
#[derive(Error, Debug)]
pub enum EmolintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Message errors
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // The message violated at least one error-level rule
    #[error("Commit message rejected: {errors} error(s), {warnings} warning(s)")]
    LintFailed { errors: usize, warnings: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule: '{name}'")]
    UnknownRule { name: String },

    #[error("Invalid value for rule '{rule}': {message}")]
    InvalidValue { rule: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Failed to read message from {source_name}: {message}")]
    ReadFailed { source_name: String, message: String },
}

/// Result type alias for emolint operations.
pub type Result<T> = std::result::Result<T, EmolintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EmolintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
