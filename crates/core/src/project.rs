// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Projects own the tasks, artifacts, context packs, runs, and share packs
//! produced while working them.

use crate::enums::ProjectStatus;
use crate::ids::ProjectId;
use serde::{Deserialize, Serialize};

/// `work/projects/<project_id>/project.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub schema_version: u32,
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
    pub created_at_ms: u64,
}

impl Project {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(name: impl Into<String>, created_at_ms: u64) -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            id: ProjectId::new(),
            name: name.into(),
            status: ProjectStatus::Active,
            created_at_ms,
        }
    }

    pub fn archive(&mut self) {
        self.status = ProjectStatus::Archived;
    }
}

/// The subdirectories `init`/`create_project` must create under a project root.
pub const PROJECT_RELATIVE_DIRS: &[&str] =
    &["tasks", "artifacts", "context_packs", "runs", "share_packs"];

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
