// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs: one invocation of a worker agent, owning its event log and outputs.

use crate::enums::RunStatus;
use crate::ids::{AgentId, ContextPackId, ProjectId, RunId};
use serde::{Deserialize, Serialize};

/// Where a [`TokenUsage`] reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageSource {
    ProviderReported,
    EstimatedChars,
}

crate::simple_display! {
    UsageSource {
        ProviderReported => "provider_reported",
        EstimatedChars => "estimated_chars",
    }
}

/// Confidence attached to an estimated (non-provider-reported) reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageConfidence {
    Low,
}

/// Token accounting for a run, either parsed from provider output or
/// estimated from character counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenUsage {
    pub input: u64,
    #[serde(default)]
    pub cached_input: u64,
    pub output: u64,
    #[serde(default)]
    pub reasoning_output: u64,
    pub total: u64,
    pub source: UsageSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<UsageConfidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_source: Option<String>,
}

impl TokenUsage {
    /// Sum the four segments, used when a provider line reports parts but
    /// not an explicit `total_tokens`.
    pub fn total_from_parts(input: u64, cached_input: u64, output: u64, reasoning_output: u64) -> u64 {
        input + cached_input + output + reasoning_output
    }
}

/// Where a [`ContextCycles`] count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleSource {
    ProviderSignal,
    Unavailable,
}

/// Context-compaction ("cycle") signal accumulation for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextCycles {
    pub count: u64,
    pub source: CycleSource,
}

impl ContextCycles {
    pub fn unavailable() -> Self {
        Self { count: 0, source: CycleSource::Unavailable }
    }
}

/// `work/projects/<project_id>/runs/<run_id>/run.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Run {
    pub schema_version: u32,
    pub id: RunId,
    pub project_id: ProjectId,
    pub agent_id: AgentId,
    pub provider: String,
    pub status: RunStatus,
    pub created_at_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_cycles: Option<ContextCycles>,
    pub context_pack_id: ContextPackId,
    pub events_relpath: String,
    /// Launch-time specification (provider command, args, driver capabilities)
    /// carried opaquely; structure is owned by the runtime that built it.
    pub spec: serde_json::Value,
}

impl Run {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(
        project_id: ProjectId,
        agent_id: AgentId,
        provider: impl Into<String>,
        context_pack_id: ContextPackId,
        spec: serde_json::Value,
        created_at_ms: u64,
    ) -> Self {
        let id = RunId::new();
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            events_relpath: format!("runs/{id}/events.jsonl"),
            id,
            project_id,
            agent_id,
            provider: provider.into(),
            status: RunStatus::Running,
            created_at_ms,
            ended_at_ms: None,
            usage: None,
            context_cycles: None,
            context_pack_id,
            spec,
        }
    }

    /// True once the run has reached a terminal status; per the global
    /// invariant, its events.jsonl must never be appended to again.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Transition to a terminal status. Exit code 0 → `Ended`, nonzero →
    /// `Failed`; cancellation always produces `Stopped` regardless of exit
    /// code, so callers pass the resolved status directly rather than a
    /// raw exit code.
    pub fn finalize(
        &mut self,
        status: RunStatus,
        ended_at_ms: u64,
        usage: TokenUsage,
        context_cycles: ContextCycles,
    ) {
        debug_assert!(status.is_terminal(), "finalize must be called with a terminal status");
        self.status = status;
        self.ended_at_ms = Some(ended_at_ms);
        self.usage = Some(usage);
        self.context_cycles = Some(context_cycles);
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
