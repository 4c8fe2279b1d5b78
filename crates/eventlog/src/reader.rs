// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replaying an `events.jsonl` file back into envelopes.
//!
//! Replay never aborts on a malformed line: a line that fails to parse is
//! reported as a [`ParseIssue`] and skipped, exactly as a torn trailing line
//! left by a crash is expected to be. Verified replay additionally recomputes
//! and checks the hash chain, reporting a mismatch as a [`VerificationIssue`]
//! without stopping either.

use crate::error::EventLogError;
use crate::hash::event_hash;
use ac_core::EventEnvelope;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A line that could not be parsed as an [`EventEnvelope`]. `seq` is the
/// 1-indexed line number within the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub seq: u64,
    pub raw: String,
    pub error: String,
}

/// A line that parsed but whose hash-chain fields don't check out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationIssue {
    pub seq: u64,
    pub code: VerificationIssueCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationIssueCode {
    /// `event_hash` does not equal `sha256(canonical_json(envelope - event_hash))`.
    HashMismatch,
    /// `prev_event_hash` does not equal the previous well-formed event's `event_hash`.
    PrevHashMismatch,
}

/// The result of replaying an events file: the envelopes that parsed (in file
/// order), plus any parse and verification issues encountered along the way.
#[derive(Debug, Default)]
pub struct ReplayResult {
    pub events: Vec<EventEnvelope>,
    pub parse_issues: Vec<ParseIssue>,
    pub verification_issues: Vec<VerificationIssue>,
}

/// Replay without recomputing hashes: fastest path, used for ordinary reads.
pub fn replay(path: &Path) -> Result<ReplayResult, EventLogError> {
    replay_inner(path, false)
}

/// Replay and recompute every event's hash chain, reporting mismatches as
/// [`VerificationIssue`]s rather than failing.
pub fn replay_verified(path: &Path) -> Result<ReplayResult, EventLogError> {
    replay_inner(path, true)
}

fn replay_inner(path: &Path, verify: bool) -> Result<ReplayResult, EventLogError> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ReplayResult::default());
        }
        Err(e) => return Err(EventLogError::Io { path: path.to_owned(), source: e }),
    };
    let reader = BufReader::new(file);

    let mut result = ReplayResult::default();
    let mut prev_hash: Option<String> = None;

    for (idx, line) in reader.lines().enumerate() {
        let seq = (idx + 1) as u64;
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                result.parse_issues.push(ParseIssue { seq, raw: String::new(), error: e.to_string() });
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let envelope: EventEnvelope = match serde_json::from_str(&line) {
            Ok(e) => e,
            Err(e) => {
                result.parse_issues.push(ParseIssue { seq, raw: line, error: e.to_string() });
                continue;
            }
        };

        if verify {
            let recomputed = event_hash(&envelope);
            if recomputed != envelope.event_hash {
                result.verification_issues.push(VerificationIssue {
                    seq,
                    code: VerificationIssueCode::HashMismatch,
                    message: format!(
                        "event_hash {} does not match recomputed {recomputed}",
                        envelope.event_hash
                    ),
                });
            }
            if envelope.prev_event_hash != prev_hash {
                result.verification_issues.push(VerificationIssue {
                    seq,
                    code: VerificationIssueCode::PrevHashMismatch,
                    message: "prev_event_hash does not chain from the previous event".to_string(),
                });
            }
        }

        prev_hash = Some(envelope.event_hash.clone());
        result.events.push(envelope);
    }

    Ok(result)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
