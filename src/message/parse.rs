// SPDX-License-Identifier: MIT

//! Commit message structure.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{MessageError, Result};

use super::header::{parse_header, Header};

lazy_static! {
    /// First line of a trailer-style footer paragraph, e.g.
    /// `Signed-off-by: A` or `BREAKING CHANGE: ...`.
    static ref TRAILER: Regex = Regex::new(r"^(?:[A-Za-z][A-Za-z-]*: |BREAKING CHANGE)").unwrap();
}

/// A parsed commit message.
#[derive(Debug, Clone)]
pub struct Message {
    /// The full original text.
    pub raw: String,
    /// The first line, unmodified.
    pub header: String,
    /// Structured header fields.
    pub fields: Header,
    /// Body paragraphs, if any.
    pub body: Option<String>,
    /// Trailer-style footer paragraph, if any.
    pub footer: Option<String>,
    /// Whether a blank line separates the header from the body.
    pub body_leading_blank: bool,
    /// Whether a blank line precedes the footer.
    pub footer_leading_blank: bool,
}

impl Message {
    /// Parse a commit message.
    ///
    /// Only a fully empty message is a hard error; a malformed header still
    /// parses, with the header fields left unset, so that rule evaluation
    /// can report it.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(MessageError::EmptyMessage.into());
        }

        let lines: Vec<&str> = text.lines().collect();
        let header = lines[0].to_string();
        let fields = parse_header(&header);

        // Group the remaining lines into paragraphs, remembering where each
        // starts so the leading-blank rules can be evaluated.
        let rest = &lines[1..];
        let mut paragraphs: Vec<(usize, usize)> = Vec::new();
        let mut start = None;
        for (i, line) in rest.iter().enumerate() {
            if line.trim().is_empty() {
                if let Some(s) = start.take() {
                    paragraphs.push((s, i));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            paragraphs.push((s, rest.len()));
        }

        let is_footer = |&(s, _): &(usize, usize)| TRAILER.is_match(rest[s]);

        let (body_spans, footer_span) = match paragraphs.split_last() {
            Some((last, init)) if is_footer(last) => (init, Some(*last)),
            _ => (&paragraphs[..], None),
        };

        let join = |spans: &[(usize, usize)]| -> Option<String> {
            if spans.is_empty() {
                return None;
            }
            Some(
                spans
                    .iter()
                    .map(|&(s, e)| rest[s..e].join("\n"))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            )
        };

        let body = join(body_spans);
        let footer = footer_span.map(|(s, e)| rest[s..e].join("\n"));

        // A block opening on the line directly after the previous content has
        // no leading blank; paragraph grouping guarantees one otherwise.
        let body_leading_blank = body_spans.first().map_or(true, |&(s, _)| s != 0);
        let footer_leading_blank = footer_span.map_or(true, |(s, _)| s != 0);

        Ok(Self {
            raw: text.to_string(),
            header,
            fields,
            body,
            footer,
            body_leading_blank,
            footer_leading_blank,
        })
    }

    /// Header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_only() {
        let msg = Message::parse(":bug: Fix crash").unwrap();
        assert_eq!(msg.header, ":bug: Fix crash");
        assert_eq!(msg.fields.commit_type.as_deref(), Some("bug"));
        assert!(msg.body.is_none());
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_empty_message() {
        assert!(Message::parse("").is_err());
        assert!(Message::parse("  \n \n").is_err());
    }

    #[test]
    fn test_parse_body_with_leading_blank() {
        let msg = Message::parse(":bug: Fix crash\n\nThe pointer was dangling.").unwrap();
        assert_eq!(msg.body.as_deref(), Some("The pointer was dangling."));
        assert!(msg.body_leading_blank);
    }

    #[test]
    fn test_parse_body_without_leading_blank() {
        let msg = Message::parse(":bug: Fix crash\nThe pointer was dangling.").unwrap();
        assert_eq!(msg.body.as_deref(), Some("The pointer was dangling."));
        assert!(!msg.body_leading_blank);
    }

    #[test]
    fn test_parse_footer() {
        let msg =
            Message::parse(":bug: Fix crash\n\nLong explanation.\n\nRefs: #12").unwrap();
        assert_eq!(msg.body.as_deref(), Some("Long explanation."));
        assert_eq!(msg.footer.as_deref(), Some("Refs: #12"));
        assert!(msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_footer_directly_after_header() {
        let msg = Message::parse(":bug: Fix crash\nRefs: #12").unwrap();
        assert_eq!(msg.footer.as_deref(), Some("Refs: #12"));
        assert!(msg.body.is_none());
        assert!(!msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_breaking_change_footer() {
        let msg = Message::parse(
            ":boom: Drop legacy endpoint\n\nBREAKING CHANGE: the /v1 API is gone",
        )
        .unwrap();
        assert!(msg.footer.as_deref().unwrap().starts_with("BREAKING CHANGE"));
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_multi_paragraph_body() {
        let msg =
            Message::parse(":memo: Describe retries\n\nFirst paragraph.\n\nSecond paragraph.")
                .unwrap();
        assert_eq!(
            msg.body.as_deref(),
            Some("First paragraph.\n\nSecond paragraph.")
        );
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_header_len_counts_chars() {
        let msg = Message::parse(":memo: Füge Grüße hinzu").unwrap();
        assert_eq!(msg.header_len(), ":memo: Füge Grüße hinzu".chars().count());
    }
}
