// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tasks are markdown-with-front-matter documents tracking one unit of work.

use crate::enums::{TaskStatus, Visibility};
use crate::ids::{AgentId, MilestoneId, ProjectId, TaskId, TeamId};
use serde::{Deserialize, Serialize};

/// One checkpoint within a task's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Milestone {
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: MilestoneId::new(), title: title.into(), done: false }
    }
}

/// The YAML front matter of `work/projects/<project_id>/tasks/<task_id>.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub schema_version: u32,
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    pub status: TaskStatus,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_agent_id: Option<AgentId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub created_at_ms: u64,
}

impl Task {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(
        project_id: ProjectId,
        title: impl Into<String>,
        visibility: Visibility,
        created_at_ms: u64,
    ) -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            id: TaskId::new(),
            project_id,
            title: title.into(),
            status: TaskStatus::Draft,
            visibility,
            team_id: None,
            assignee_agent_id: None,
            milestones: Vec::new(),
            schedule: None,
            execution_plan: None,
            scope: None,
            created_at_ms,
        }
    }

    crate::setters! {
        option {
            team_id: TeamId,
            assignee_agent_id: AgentId,
            schedule: String,
            execution_plan: String,
            scope: String,
        }
    }

    /// Fraction of milestones marked done, `0.0` for a task with none yet.
    pub fn progress(&self) -> f64 {
        if self.milestones.is_empty() {
            return 0.0;
        }
        let done = self.milestones.iter().filter(|m| m.done).count();
        done as f64 / self.milestones.len() as f64
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
