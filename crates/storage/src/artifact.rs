// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact creation. Artifacts are immutable once written: there is no
//! update function, only `create_artifact`. A correction is a new artifact.

use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::artifact_path;
use crate::lock::workspace_write_lock;
use ac_core::{
    parse_front_matter, render_front_matter, Artifact, ArtifactId, ArtifactType, ContextPackId, ProjectId, RunId,
    Visibility,
};
use std::path::Path;

/// Validate `body` against `kind`'s required headings, then write the
/// artifact markdown under the workspace lock. Fails closed: an artifact
/// whose body is missing a required heading is never persisted.
#[allow(clippy::too_many_arguments)]
pub fn create_artifact(
    root: &Path,
    project_id: ProjectId,
    kind: ArtifactType,
    title: impl Into<String>,
    visibility: Visibility,
    produced_by: ac_core::AgentId,
    run_id: RunId,
    context_pack_id: ContextPackId,
    body: &str,
    created_at_ms: u64,
) -> Result<Artifact, StorageError> {
    let artifact = Artifact::new(kind, title, visibility, produced_by, run_id, context_pack_id, created_at_ms);
    artifact.validate_body(body)?;

    let _lock = workspace_write_lock(root)?;
    let rendered = render_front_matter(&artifact, body)?;
    write_file_atomic(&artifact_path(root, project_id, artifact.id), rendered.as_bytes())?;

    Ok(artifact)
}

pub fn read_artifact(root: &Path, project_id: ProjectId, id: ArtifactId) -> Result<(Artifact, String), StorageError> {
    let path = artifact_path(root, project_id, id);
    let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
    let (artifact, body) = parse_front_matter::<Artifact>(&raw)?;
    Ok((artifact, body))
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
