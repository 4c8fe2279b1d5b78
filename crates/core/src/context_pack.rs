// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Context packs capture the inputs/environment snapshot bound to one run.

use crate::enums::Visibility;
use crate::ids::{AgentId, ArtifactId, ContextPackId, ProjectId, RunId};
use serde::{Deserialize, Serialize};

/// Repository identifier as configured in `.local/machine.yaml`'s `repo_roots`.
pub type RepoId = String;

/// HEAD-plus-dirty-patch snapshot of one repository at context-pack build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepoSnapshot {
    pub repo_id: RepoId,
    pub head_sha: String,
    pub dirty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirty_patch_artifact_id: Option<ArtifactId>,
}

/// One document included verbatim in a context pack, content-addressed by
/// its hash at the time of inclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncludedDoc {
    pub path: String,
    pub sha256: String,
    pub visibility: Visibility,
}

/// `work/projects/<project_id>/context_packs/<ctx_id>/manifest.yaml`. Bound
/// 1:1 to the run that referenced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextPack {
    pub schema_version: u32,
    pub id: ContextPackId,
    pub created_at_ms: u64,
    pub run_id: RunId,
    pub project_id: ProjectId,
    pub agent_id: AgentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_snapshot: Option<RepoSnapshot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_docs: Vec<IncludedDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_allowlist: Vec<String>,
}

impl ContextPack {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(
        run_id: RunId,
        project_id: ProjectId,
        agent_id: AgentId,
        created_at_ms: u64,
    ) -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            id: ContextPackId::new(),
            created_at_ms,
            run_id,
            project_id,
            agent_id,
            repo_snapshot: None,
            included_docs: Vec::new(),
            tool_allowlist: Vec::new(),
        }
    }

    crate::setters! {
        option {
            repo_snapshot: RepoSnapshot,
        }
    }
}

#[cfg(test)]
#[path = "context_pack_tests.rs"]
mod tests;
