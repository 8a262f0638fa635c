// SPDX-License-Identifier: MIT

//! Rule evaluation for commit messages.
//!
//! The rule table lives in the configuration; this module applies it to a
//! parsed message and collects the violations.

mod builtin;
mod engine;
mod validator;

pub use builtin::apply_rules;
pub use engine::LintEngine;
pub use validator::{LintIssue, LintReport};
