// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `org/teams/<team_id>/team.yaml` CRUD.

use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::team_yaml_path;
use crate::lock::workspace_write_lock;
use ac_core::Team;
use std::path::Path;

/// Create a new team under the workspace lock.
pub fn create_team(root: &Path, name: impl Into<String>, created_at_ms: u64) -> Result<Team, StorageError> {
    let _lock = workspace_write_lock(root)?;
    let team = Team::new(name, created_at_ms);
    write_file_atomic(&team_yaml_path(root, team.id), serde_yaml::to_string(&team)?.as_bytes())?;
    Ok(team)
}

pub fn read_team(root: &Path, id: ac_core::TeamId) -> Result<Team, StorageError> {
    let path = team_yaml_path(root, id);
    let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
    Ok(serde_yaml::from_str(&raw)?)
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod tests;
