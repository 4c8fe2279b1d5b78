// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `work/projects/<project_id>/` CRUD: `project.yaml`, the fixed owned
//! subdirectories ([`ac_core::PROJECT_RELATIVE_DIRS`]), `memory.md`, and
//! `repos.yaml`.

use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::{project_dir, project_memory_md_path, project_repos_yaml_path, project_yaml_path};
use crate::lock::workspace_write_lock;
use ac_core::{Project, ProjectId, PROJECT_RELATIVE_DIRS};
use std::path::Path;

/// Create a project's directory tree, `project.yaml`, and its blank
/// `memory.md`/`repos.yaml` siblings.
pub fn create_project(root: &Path, name: impl Into<String>, created_at_ms: u64) -> Result<Project, StorageError> {
    let _lock = workspace_write_lock(root)?;

    let project = Project::new(name, created_at_ms);
    for relative in PROJECT_RELATIVE_DIRS {
        let dir = project_dir(root, project.id).join(relative);
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;
    }

    write_file_atomic(&project_yaml_path(root, project.id), serde_yaml::to_string(&project)?.as_bytes())?;
    write_file_atomic(&project_memory_md_path(root, project.id), b"# memory.md\n")?;
    write_file_atomic(&project_repos_yaml_path(root, project.id), b"repos: []\n")?;

    Ok(project)
}

pub fn read_project(root: &Path, id: ProjectId) -> Result<Project, StorageError> {
    let path = project_yaml_path(root, id);
    let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
    Ok(serde_yaml::from_str(&raw)?)
}

/// Mark a project archived and rewrite `project.yaml`.
pub fn archive_project(root: &Path, id: ProjectId) -> Result<Project, StorageError> {
    let _lock = workspace_write_lock(root)?;
    let mut project = read_project(root, id)?;
    project.archive();
    write_file_atomic(&project_yaml_path(root, id), serde_yaml::to_string(&project)?.as_bytes())?;
    Ok(project)
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
