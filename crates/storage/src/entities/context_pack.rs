// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `work/projects/<project_id>/context_packs/<ctx_id>/manifest.yaml` CRUD.
//!
//! A context pack is bound 1:1 to the run that references it; [`super::run`]
//! mints the pair together so both sides of the reference are known up
//! front, but the manifest write itself lives here.

use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::context_pack_manifest_path;
use crate::lock::workspace_write_lock;
use ac_core::{AgentId, ContextPack, ContextPackId, ProjectId, RunId};
use std::path::Path;

/// Build and persist a new context pack for `run_id` under the workspace
/// lock. Most callers go through [`super::run::start_run`] instead, which
/// mints the run and its pack together.
pub fn create_context_pack(
    root: &Path,
    run_id: RunId,
    project_id: ProjectId,
    agent_id: AgentId,
    created_at_ms: u64,
) -> Result<ContextPack, StorageError> {
    let _lock = workspace_write_lock(root)?;
    let pack = ContextPack::new(run_id, project_id, agent_id, created_at_ms);
    write_context_pack(root, &pack)?;
    Ok(pack)
}

/// Write (or overwrite) a context pack's manifest. Does not itself acquire
/// the workspace lock, so callers that already hold it (e.g. `start_run`)
/// can call this directly.
pub fn write_context_pack(root: &Path, pack: &ContextPack) -> Result<(), StorageError> {
    let path = context_pack_manifest_path(root, pack.project_id, pack.id);
    write_file_atomic(&path, serde_yaml::to_string(pack)?.as_bytes())
}

pub fn read_context_pack(root: &Path, project_id: ProjectId, id: ContextPackId) -> Result<ContextPack, StorageError> {
    let path = context_pack_manifest_path(root, project_id, id);
    let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
    Ok(serde_yaml::from_str(&raw)?)
}

#[cfg(test)]
#[path = "context_pack_tests.rs"]
mod tests;
