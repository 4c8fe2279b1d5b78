// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent records: the organizational actors that run provider sessions.

use crate::enums::AgentRole;
use crate::ids::{AgentId, TeamId};
use serde::{Deserialize, Serialize};

/// `org/agents/<agent_id>/agent.yaml`. Owns its own append-only `journal.md`
/// and `AGENTS.md`/`role.md`/`skills_index.md`/`mistakes.yaml` alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Agent {
    pub schema_version: u32,
    pub id: AgentId,
    pub name: String,
    pub role: AgentRole,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    /// How this agent's sessions are launched (binary name / adapter key).
    pub launcher: String,
    pub created_at_ms: u64,
}

impl Agent {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(
        name: impl Into<String>,
        role: AgentRole,
        provider: impl Into<String>,
        launcher: impl Into<String>,
        created_at_ms: u64,
    ) -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            id: AgentId::new(),
            name: name.into(),
            role,
            provider: provider.into(),
            model_hint: None,
            team_id: None,
            launcher: launcher.into(),
            created_at_ms,
        }
    }

    crate::setters! {
        option {
            model_hint: String,
            team_id: TeamId,
        }
    }
}

/// The per-agent on-disk files created alongside `agent.yaml`.
pub struct AgentFileSet;

impl AgentFileSet {
    /// Relative paths (from the agent's own directory) created by `init`
    /// when a new agent is added to the org tree.
    pub const RELATIVE_PATHS: &'static [&'static str] =
        &["agent.yaml", "journal.md", "AGENTS.md", "role.md", "skills_index.md", "mistakes.yaml"];
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
