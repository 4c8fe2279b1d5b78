// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::enums::{ArtifactType, Visibility};
use crate::event::{EventEnvelope, EventKind, ProviderRawPayload};
use crate::ids::{AgentId, ArtifactId, ContextPackId, EventId, ProjectId, RunId};
use crate::run::{ContextCycles, CycleSource, TokenUsage, UsageSource};
use chrono::Utc;

/// A minimal `run.started`-era envelope for a fresh run, with no
/// `prev_event_hash` (as if it were first in the file).
pub fn sample_envelope(run_id: RunId, kind: EventKind) -> EventEnvelope {
    EventEnvelope {
        schema_version: EventEnvelope::CURRENT_SCHEMA_VERSION,
        event_id: EventId::new(),
        correlation_id: run_id.to_string(),
        causation_id: None,
        ts_wallclock: Utc::now(),
        ts_monotonic_ms: 0,
        run_id,
        session_ref: None,
        actor: "agent_test".to_string(),
        visibility: Visibility::Team,
        kind,
        prev_event_hash: None,
        event_hash: String::new(),
    }
}

pub fn provider_raw_envelope(run_id: RunId, chunk: &str) -> EventEnvelope {
    sample_envelope(
        run_id,
        EventKind::ProviderRaw(ProviderRawPayload { raw: serde_json::json!({"chunk": chunk}) }),
    )
}

pub fn reported_usage(total: u64) -> TokenUsage {
    TokenUsage {
        input: total / 2,
        cached_input: 0,
        output: total - total / 2,
        reasoning_output: 0,
        total,
        source: UsageSource::ProviderReported,
        confidence: None,
        cost_usd: None,
        cost_source: None,
    }
}

pub fn no_cycles() -> ContextCycles {
    ContextCycles { count: 0, source: CycleSource::Unavailable }
}

/// Arbitrary but consistent ids for wiring up a test artifact without caring
/// about which project/run/context-pack it nominally belongs to.
pub struct ArtifactFixture {
    pub agent_id: AgentId,
    pub run_id: RunId,
    pub project_id: ProjectId,
    pub context_pack_id: ContextPackId,
    pub artifact_id: ArtifactId,
}

impl ArtifactFixture {
    pub fn new() -> Self {
        Self {
            agent_id: AgentId::new(),
            run_id: RunId::new(),
            project_id: ProjectId::new(),
            context_pack_id: ContextPackId::new(),
            artifact_id: ArtifactId::new(),
        }
    }
}

impl Default for ArtifactFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Body text containing exactly the required headings for `kind`, useful
/// for building a passing [`crate::Artifact::validate_body`] fixture.
pub fn body_with_required_headings(kind: ArtifactType) -> String {
    let mut body = String::new();
    for heading in kind.required_headings() {
        body.push_str(&format!("## {heading}\n\ncontent\n\n"));
    }
    body
}
