// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secret redaction and the fail-closed assertion gate (spec §4.K).
//!
//! Used on memory-delta insert lines, patch bodies prior to apply, and
//! reviewer notes prior to persistence. [`assert_no_sensitive_text`] must run
//! before any of those are written; a failure here must not persist any side
//! effects.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// One named secret-shaped pattern.
struct Pattern {
    kind: &'static str,
    regex: Regex,
}

#[allow(clippy::expect_used)]
fn patterns() -> &'static [Pattern] {
    static PATTERNS: OnceLock<Vec<Pattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            Pattern {
                kind: "OPENAI_API_KEY",
                regex: Regex::new(r"sk-\w{20,}").expect("constant regex pattern is valid"),
            },
            Pattern {
                kind: "GITHUB_TOKEN",
                regex: Regex::new(r"gh[pousr]_\w{20,}").expect("constant regex pattern is valid"),
            },
            Pattern {
                kind: "SLACK_TOKEN",
                regex: Regex::new(r"xox[bpa]-[A-Za-z0-9-]+").expect("constant regex pattern is valid"),
            },
            Pattern {
                kind: "BEARER_TOKEN",
                regex: Regex::new(r"Bearer \S{12,}").expect("constant regex pattern is valid"),
            },
            Pattern {
                kind: "KEY_VALUE_SECRET",
                regex: Regex::new(r"(?i)\b(\w*(secret|token|password|api_key)\w*)\s*=\s*(\S+)")
                    .expect("constant regex pattern is valid"),
            },
        ]
    })
}

const REDACTED: &str = "[REDACTED]";

/// Whether `caps` is a genuine secret rather than a previously-redacted
/// marker re-matched by its own pattern. Only `KEY_VALUE_SECRET`'s value half
/// (`\S+`) is loose enough to match `[REDACTED]` itself; every other pattern
/// matches a secret's literal shape, which `[REDACTED]` never takes.
fn is_real_match(pattern: &Pattern, caps: &regex::Captures) -> bool {
    if pattern.kind == "KEY_VALUE_SECRET" {
        caps.get(3).map(|m| m.as_str()) != Some(REDACTED)
    } else {
        true
    }
}

/// Apply every secret pattern to `s`, returning the redacted text and how
/// many matches were replaced. Idempotent: a second pass over the output
/// yields `redaction_count == 0`.
pub fn redact_sensitive_text(s: &str) -> (String, usize) {
    let mut text = s.to_string();
    let mut count = 0usize;
    for pattern in patterns() {
        let replaced = pattern.regex.replace_all(&text, |caps: &regex::Captures| {
            if !is_real_match(pattern, caps) {
                return caps[0].to_string();
            }
            count += 1;
            if pattern.kind == "KEY_VALUE_SECRET" {
                format!("{}={REDACTED}", &caps[1])
            } else {
                REDACTED.to_string()
            }
        });
        text = replaced.into_owned();
    }
    (text, count)
}

/// Raised by [`assert_no_sensitive_text`] when `s` contains secret-shaped
/// text. Carries enough detail for a caller to report without re-deriving it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("sensitive text detected in {context_label}: {total_matches} match(es)")]
pub struct SensitiveTextError {
    pub reason_code: &'static str,
    pub context_label: String,
    pub matches_by_kind: BTreeMap<String, usize>,
    pub total_matches: usize,
}

/// Fail closed if `s` contains anything matching a secret pattern. Callers
/// must check this before persisting `s` anywhere; a failure here means
/// nothing derived from `s` may be written.
pub fn assert_no_sensitive_text(s: &str, label: &str) -> Result<(), SensitiveTextError> {
    let mut matches_by_kind: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0usize;
    for pattern in patterns() {
        let n = pattern.regex.captures_iter(s).filter(|caps| is_real_match(pattern, caps)).count();
        if n > 0 {
            total += n;
            matches_by_kind.insert(pattern.kind.to_string(), n);
        }
    }
    if total == 0 {
        return Ok(());
    }
    Err(SensitiveTextError {
        reason_code: "SECRET_DETECTED",
        context_label: label.to_string(),
        matches_by_kind,
        total_matches: total,
    })
}

#[cfg(test)]
#[path = "redaction_tests.rs"]
mod tests;
