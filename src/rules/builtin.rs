// SPDX-License-Identifier: MIT

//! The built-in rule checks.

use crate::config::{Condition, EmolintConfig, RuleId, RuleSetting, Severity};
use crate::message::Message;

use super::validator::LintIssue;

/// Apply every configured rule to a parsed message.
pub fn apply_rules(message: &Message, config: &EmolintConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    for &id in RuleId::all() {
        let rule = match config.rule(id) {
            Some(rule) => rule,
            None => continue,
        };
        if rule.severity == Severity::Disabled {
            continue;
        }

        let check: fn(&Message, &RuleSetting) -> Option<LintIssue> = match id {
            RuleId::TypeEnum => check_type_enum,
            RuleId::BodyLeadingBlank => check_body_leading_blank,
            RuleId::FooterLeadingBlank => check_footer_leading_blank,
            RuleId::HeaderMaxLength => check_header_max_length,
            RuleId::ScopeCase => check_scope_case,
            RuleId::SubjectCase => check_subject_case,
            RuleId::SubjectEmpty => check_subject_empty,
            RuleId::SubjectFullStop => check_subject_full_stop,
            RuleId::TypeCase => check_type_case,
            RuleId::TypeEmpty => check_type_empty,
        };

        if let Some(issue) = check(message, rule) {
            issues.push(issue);
        }
    }

    issues
}

fn issue(
    rule: RuleId,
    setting: &RuleSetting,
    message: impl Into<String>,
    suggestion: Option<String>,
) -> Option<LintIssue> {
    Some(LintIssue {
        rule,
        message: message.into(),
        suggestion,
        severity: setting.severity,
    })
}

/// Resolve the always/never condition against "the positive case holds".
fn violated(setting: &RuleSetting, holds: bool) -> bool {
    match setting.condition {
        Condition::Always => !holds,
        Condition::Never => holds,
    }
}

/// Check whether a value satisfies a named casing.
fn matches_case(value: &str, case: &str) -> bool {
    match case {
        "lower-case" => value == value.to_lowercase(),
        "upper-case" => value == value.to_uppercase(),
        "sentence-case" => value.chars().next().map_or(true, |c| !c.is_lowercase()),
        other => {
            tracing::debug!("Unknown case name '{}', treating as satisfied", other);
            true
        }
    }
}

/// Check if the commit type is in the allowed set.
fn check_type_enum(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    let empty: &[String] = &[];
    let allowed = rule.as_list().unwrap_or(empty);

    let token = message
        .fields
        .commit_type
        .as_ref()
        .map(|t| format!(":{}:", t));
    let in_set = token
        .as_ref()
        .map_or(false, |t| allowed.iter().any(|a| a == t));

    if !violated(rule, in_set) {
        return None;
    }

    let text = match token {
        Some(t) => format!("Type '{}' is not in the allowed set", t),
        None => "No commit type token found in the header".to_string(),
    };
    issue(
        RuleId::TypeEnum,
        rule,
        text,
        Some("Start the header with an allowed :emoji: token, e.g. :sparkles:".to_string()),
    )
}

/// Check if the commit type is empty or missing.
fn check_type_empty(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    let empty = message
        .fields
        .commit_type
        .as_deref()
        .map_or(true, |t| t.is_empty());

    if !violated(rule, empty) {
        return None;
    }
    issue(
        RuleId::TypeEmpty,
        rule,
        "Type must not be empty",
        Some("Use the ':type:(scope) subject' header form".to_string()),
    )
}

/// Check the casing of the commit type.
fn check_type_case(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    let commit_type = message.fields.commit_type.as_deref()?;
    if commit_type.is_empty() {
        return None; // emptiness is type-empty's concern
    }

    let cases = rule.case_names();
    let ok = cases.iter().any(|case| matches_case(commit_type, case));

    if !violated(rule, ok) {
        return None;
    }
    issue(
        RuleId::TypeCase,
        rule,
        format!("Type '{}' must be {}", commit_type, cases.join(" or ")),
        None,
    )
}

/// Check the casing of the scope.
fn check_scope_case(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    let scope = message.fields.scope.as_deref()?;
    if scope.is_empty() {
        return None;
    }

    let cases = rule.case_names();
    let ok = cases.iter().any(|case| matches_case(scope, case));

    if !violated(rule, ok) {
        return None;
    }
    issue(
        RuleId::ScopeCase,
        rule,
        format!("Scope '{}' must be {}", scope, cases.join(" or ")),
        None,
    )
}

/// Check if the subject is empty or missing.
fn check_subject_empty(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    let empty = message
        .fields
        .subject
        .as_deref()
        .map_or(true, |s| s.is_empty());

    if !violated(rule, empty) {
        return None;
    }
    issue(
        RuleId::SubjectEmpty,
        rule,
        "Subject must not be empty",
        Some("Describe the change after the type token".to_string()),
    )
}

/// Check the casing of the subject.
fn check_subject_case(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    let subject = message.fields.subject.as_deref()?;
    if subject.is_empty() {
        return None;
    }

    let cases = rule.case_names();
    let ok = cases.iter().any(|case| matches_case(subject, case));

    if !violated(rule, ok) {
        return None;
    }
    issue(
        RuleId::SubjectCase,
        rule,
        format!("Subject must be {}", cases.join(" or ")),
        None,
    )
}

/// Check whether the subject ends with one of the configured full stops.
fn check_subject_full_stop(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    let subject = message.fields.subject.as_deref()?;
    let configured = rule.text_values();
    let stops: Vec<&str> = if configured.is_empty() {
        vec!["."]
    } else {
        configured
    };
    let ends = stops.iter().any(|stop| subject.ends_with(stop));

    if !violated(rule, ends) {
        return None;
    }
    issue(
        RuleId::SubjectFullStop,
        rule,
        format!("Subject must not end with '{}'", stops.join("' or '")),
        Some("Drop the trailing punctuation".to_string()),
    )
}

/// Check the header length limit.
fn check_header_max_length(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    let max = rule.as_number().unwrap_or(72) as usize;
    let len = message.header_len();
    let within = len <= max;

    if !violated(rule, within) {
        return None;
    }
    issue(
        RuleId::HeaderMaxLength,
        rule,
        format!("Header is too long: {} characters (max: {})", len, max),
        Some(format!("Shorten the header to {} characters or less", max)),
    )
}

/// Check that the body is preceded by a blank line.
fn check_body_leading_blank(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    message.body.as_ref()?;

    if !violated(rule, message.body_leading_blank) {
        return None;
    }
    issue(
        RuleId::BodyLeadingBlank,
        rule,
        "Body must be preceded by a blank line",
        Some("Insert an empty line after the header".to_string()),
    )
}

/// Check that the footer is preceded by a blank line.
fn check_footer_leading_blank(message: &Message, rule: &RuleSetting) -> Option<LintIssue> {
    message.footer.as_ref()?;

    if !violated(rule, message.footer_leading_blank) {
        return None;
    }
    issue(
        RuleId::FooterLeadingBlank,
        rule,
        "Footer must be preceded by a blank line",
        Some("Insert an empty line before the footer".to_string()),
    )
}
