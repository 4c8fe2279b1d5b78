// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `org/agents/<agent_id>/` CRUD: `agent.yaml` plus the fixed sibling files
//! every agent owns ([`ac_core::AgentFileSet`]).

use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::{
    agent_agents_md_path, agent_journal_path, agent_mistakes_yaml_path, agent_role_md_path, agent_skills_index_path,
    agent_yaml_path,
};
use crate::lock::workspace_write_lock;
use ac_core::{Agent, AgentId, AgentRole, TeamId};
use std::path::Path;

pub struct NewAgent {
    pub name: String,
    pub role: AgentRole,
    pub provider: String,
    pub launcher: String,
    pub team_id: Option<TeamId>,
}

/// Create an agent's directory and every sibling file `AgentFileSet` lists.
pub fn create_agent(root: &Path, new_agent: NewAgent, created_at_ms: u64) -> Result<Agent, StorageError> {
    let _lock = workspace_write_lock(root)?;

    let mut agent = Agent::new(new_agent.name, new_agent.role, new_agent.provider, new_agent.launcher, created_at_ms);
    if let Some(team_id) = new_agent.team_id {
        agent = agent.team_id(team_id);
    }

    write_file_atomic(&agent_yaml_path(root, agent.id), serde_yaml::to_string(&agent)?.as_bytes())?;
    write_file_atomic(&agent_journal_path(root, agent.id), b"")?;
    write_file_atomic(&agent_agents_md_path(root, agent.id), b"# AGENTS.md\n")?;
    write_file_atomic(&agent_role_md_path(root, agent.id), b"# role.md\n")?;
    write_file_atomic(&agent_skills_index_path(root, agent.id), b"# skills_index.md\n")?;
    write_file_atomic(&agent_mistakes_yaml_path(root, agent.id), b"mistakes: []\n")?;

    Ok(agent)
}

pub fn read_agent(root: &Path, id: AgentId) -> Result<Agent, StorageError> {
    let path = agent_yaml_path(root, id);
    let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
    Ok(serde_yaml::from_str(&raw)?)
}

/// Append a line to an agent's append-only journal under the workspace lock.
pub fn append_journal_line(root: &Path, id: AgentId, line: &str) -> Result<(), StorageError> {
    let _lock = workspace_write_lock(root)?;
    let path = agent_journal_path(root, id);
    let mut existing = std::fs::read_to_string(&path).unwrap_or_default();
    existing.push_str(line.trim_end_matches('\n'));
    existing.push('\n');
    write_file_atomic(&path, existing.as_bytes())
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
