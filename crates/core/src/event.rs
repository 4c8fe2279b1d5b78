// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The event envelope persisted, one per line, in a run's `events.jsonl`.
//!
//! Dynamic-shaped payloads use a tagged sum type for every well-known event
//! this system emits, with an open `other` case for any event type a future
//! schema version might introduce — the same shape as a catch-all "Custom"
//! variant, just without retaining the discarded payload.

use crate::enums::{ReviewDecision, Visibility};
use crate::ids::{ArtifactId, EventId, ReviewId, RunId};
use crate::run::{ContextCycles, TokenUsage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunStartedPayload {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunEndedPayload {
    pub usage: TokenUsage,
    pub context_cycles: ContextCycles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunFailedPayload {
    pub usage: TokenUsage,
    pub context_cycles: ContextCycles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunStoppedPayload {
    pub usage: TokenUsage,
    pub context_cycles: ContextCycles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderRawPayload {
    /// The raw line the provider subprocess wrote, parsed as JSON when
    /// possible and carried as a JSON string otherwise.
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyDeniedPayload {
    pub action: String,
    pub resource_id: String,
    pub rule_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApprovalDecidedPayload {
    pub review_id: ReviewId,
    pub subject: ArtifactId,
    pub decision: ReviewDecision,
}

/// The `{type, payload}` pair of an envelope, adjacently tagged so the two
/// keys serialize as siblings on the envelope object rather than nested
/// under a wrapper key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum EventKind {
    RunStarted(RunStartedPayload),
    RunEnded(RunEndedPayload),
    RunFailed(RunFailedPayload),
    RunStopped(RunStoppedPayload),
    ProviderRaw(ProviderRawPayload),
    PolicyDenied(PolicyDeniedPayload),
    ApprovalDecided(ApprovalDecidedPayload),
    /// A well-formed envelope whose `type` this build doesn't recognize
    /// (e.g. written by a newer schema_version). Replay keeps going; the
    /// original payload is not retained, matching how a future reader
    /// should treat any event kind it doesn't understand as opaque.
    #[serde(other)]
    Other,
}

impl EventKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            EventKind::RunStarted(_) => "run.started",
            EventKind::RunEnded(_) => "run.ended",
            EventKind::RunFailed(_) => "run.failed",
            EventKind::RunStopped(_) => "run.stopped",
            EventKind::ProviderRaw(_) => "provider.raw",
            EventKind::PolicyDenied(_) => "policy.denied",
            EventKind::ApprovalDecided(_) => "approval.decided",
            EventKind::Other => "other",
        }
    }
}

/// One JSON line in a run's `events.jsonl`, hash-chained to the line before it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub schema_version: u32,
    pub event_id: EventId,
    pub correlation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causation_id: Option<String>,
    pub ts_wallclock: DateTime<Utc>,
    pub ts_monotonic_ms: u64,
    pub run_id: RunId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_ref: Option<String>,
    /// Actor id string: an agent id, or the literal `"human"` for the
    /// principal acting directly.
    pub actor: String,
    pub visibility: Visibility,
    #[serde(flatten)]
    pub kind: EventKind,
    pub prev_event_hash: Option<String>,
    pub event_hash: String,
}

impl EventEnvelope {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    /// Build the envelope as it will be hashed: every field except
    /// `event_hash`, exactly as `event_hash = sha256(canonical_json(this))`
    /// requires.
    pub fn hashable_value(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        if let Some(obj) = value.as_object_mut() {
            obj.remove("event_hash");
        }
        value
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
