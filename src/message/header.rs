// SPDX-License-Identifier: MIT

//! Header field extraction.
//!
//! The first line of a commit message carries four fields:
//!
//! ```text
//! :sparkles:(api) Add retry support (#42)
//! ^^^^^^^^^^ ^^^  ^^^^^^^^^^^^^^^^^  ^^
//! type       scope subject           ticket
//! ```
//!
//! The reference pattern is
//! `^(:\w*:)(?:\((.*?)\))?\s((?:.*(?=\())|.*)(?:\(#(\d*)\))?`. The subject
//! alternation uses a lookahead, which the regex crate does not support, so
//! the prefix is matched with a regex and the subject/ticket boundary is
//! resolved by hand with the same semantics: the subject runs up to the LAST
//! `(` of the remaining text (or to the end when there is none), and the
//! ticket is captured only when that boundary reads `(#digits)`. Text after
//! a non-matching parenthesized tail belongs to no field, and the match
//! still succeeds.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Type token, optional lazily-matched scope, one separator whitespace.
    /// ASCII word class to match the reference pattern's `\w`.
    static ref HEADER_PREFIX: Regex =
        Regex::new(r"^(?P<type>:[0-9A-Za-z_]*:)(?:\((?P<scope>.*?)\))?\s(?P<rest>.*)$").unwrap();

    /// Trailing ticket reference, anchored at the subject boundary only.
    static ref TICKET: Regex = Regex::new(r"^\(#(?P<ticket>[0-9]*)\)").unwrap();
}

/// Structured fields of a commit header.
///
/// All fields are `None` when the header does not match the pattern at all;
/// rule evaluation then reports the malformed header as rule violations
/// rather than a hard failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Commit type without its colon delimiters (e.g. `sparkles`).
    pub commit_type: Option<String>,
    /// Scope, exactly as written inside the parentheses.
    pub scope: Option<String>,
    /// Subject with surrounding whitespace trimmed.
    pub subject: Option<String>,
    /// Ticket number digits from a trailing `(#N)` reference.
    pub ticket: Option<String>,
}

impl Header {
    /// Whether the header line matched the pattern.
    pub fn is_matched(&self) -> bool {
        self.commit_type.is_some()
    }
}

/// Extract the structured fields from a single header line.
pub fn parse_header(line: &str) -> Header {
    let captures = match HEADER_PREFIX.captures(line) {
        Some(c) => c,
        None => {
            tracing::debug!("Header did not match the pattern: {:?}", line);
            return Header::default();
        }
    };

    let token = &captures["type"];
    let commit_type = token[1..token.len() - 1].to_string();
    let scope = captures.name("scope").map(|m| m.as_str().to_string());
    let rest = &captures["rest"];

    let (subject_raw, ticket) = match rest.rfind('(') {
        Some(idx) => {
            let tail = &rest[idx..];
            let ticket = TICKET
                .captures(tail)
                .map(|c| c["ticket"].to_string());
            (&rest[..idx], ticket)
        }
        None => (rest, None),
    };

    Header {
        commit_type: Some(commit_type),
        scope,
        subject: Some(subject_raw.trim().to_string()),
        ticket,
    }
}
