// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path builders for the required workspace tree (spec §3).
//!
//! Every path a writer or reader needs is built from here so the tree shape
//! lives in exactly one place.

use ac_core::{AgentId, ArtifactId, ContextPackId, ProjectId, ReviewId, RunId, SharePackId, TaskId, TeamId};
use std::path::{Path, PathBuf};

/// Directories `init` must create (relative to the workspace root), in
/// creation order so parents always precede children.
pub const REQUIRED_DIRS: &[&str] = &[
    "company",
    "company/migrations",
    "org",
    "org/teams",
    "org/agents",
    "work",
    "work/projects",
    "inbox",
    "inbox/reviews",
    "inbox/help_requests",
    ".local",
    ".local/locks",
    ".local/worktrees",
];

/// Files `init` must create with their defaults (relative to the workspace
/// root). `.local/index.sqlite` is intentionally excluded: `ac-index` creates
/// it lazily on first open rather than `init` seeding an empty database file.
pub const REQUIRED_FILES: &[&str] = &["company/company.yaml", "company/policy.yaml", ".local/machine.yaml"];

pub fn company_dir(root: &Path) -> PathBuf {
    root.join("company")
}

pub fn company_yaml_path(root: &Path) -> PathBuf {
    company_dir(root).join("company.yaml")
}

pub fn policy_yaml_path(root: &Path) -> PathBuf {
    company_dir(root).join("policy.yaml")
}

pub fn migrations_dir(root: &Path) -> PathBuf {
    company_dir(root).join("migrations")
}

pub fn org_dir(root: &Path) -> PathBuf {
    root.join("org")
}

pub fn teams_dir(root: &Path) -> PathBuf {
    org_dir(root).join("teams")
}

pub fn team_dir(root: &Path, id: TeamId) -> PathBuf {
    teams_dir(root).join(id.as_str())
}

pub fn team_yaml_path(root: &Path, id: TeamId) -> PathBuf {
    team_dir(root, id).join("team.yaml")
}

pub fn agents_dir(root: &Path) -> PathBuf {
    org_dir(root).join("agents")
}

pub fn agent_dir(root: &Path, id: AgentId) -> PathBuf {
    agents_dir(root).join(id.as_str())
}

pub fn agent_yaml_path(root: &Path, id: AgentId) -> PathBuf {
    agent_dir(root, id).join("agent.yaml")
}

pub fn agent_journal_path(root: &Path, id: AgentId) -> PathBuf {
    agent_dir(root, id).join("journal.md")
}

pub fn agent_agents_md_path(root: &Path, id: AgentId) -> PathBuf {
    agent_dir(root, id).join("AGENTS.md")
}

pub fn agent_role_md_path(root: &Path, id: AgentId) -> PathBuf {
    agent_dir(root, id).join("role.md")
}

pub fn agent_skills_index_path(root: &Path, id: AgentId) -> PathBuf {
    agent_dir(root, id).join("skills_index.md")
}

pub fn agent_mistakes_yaml_path(root: &Path, id: AgentId) -> PathBuf {
    agent_dir(root, id).join("mistakes.yaml")
}

pub fn work_dir(root: &Path) -> PathBuf {
    root.join("work")
}

pub fn projects_dir(root: &Path) -> PathBuf {
    work_dir(root).join("projects")
}

pub fn project_dir(root: &Path, id: ProjectId) -> PathBuf {
    projects_dir(root).join(id.as_str())
}

pub fn project_yaml_path(root: &Path, id: ProjectId) -> PathBuf {
    project_dir(root, id).join("project.yaml")
}

pub fn project_memory_md_path(root: &Path, id: ProjectId) -> PathBuf {
    project_dir(root, id).join("memory.md")
}

pub fn project_repos_yaml_path(root: &Path, id: ProjectId) -> PathBuf {
    project_dir(root, id).join("repos.yaml")
}

pub fn tasks_dir(root: &Path, project_id: ProjectId) -> PathBuf {
    project_dir(root, project_id).join("tasks")
}

pub fn task_path(root: &Path, project_id: ProjectId, id: TaskId) -> PathBuf {
    tasks_dir(root, project_id).join(format!("{id}.md"))
}

pub fn artifacts_dir(root: &Path, project_id: ProjectId) -> PathBuf {
    project_dir(root, project_id).join("artifacts")
}

pub fn artifact_path(root: &Path, project_id: ProjectId, id: ArtifactId) -> PathBuf {
    artifacts_dir(root, project_id).join(format!("{id}.md"))
}

pub fn context_packs_dir(root: &Path, project_id: ProjectId) -> PathBuf {
    project_dir(root, project_id).join("context_packs")
}

pub fn context_pack_dir(root: &Path, project_id: ProjectId, id: ContextPackId) -> PathBuf {
    context_packs_dir(root, project_id).join(id.as_str())
}

pub fn context_pack_manifest_path(root: &Path, project_id: ProjectId, id: ContextPackId) -> PathBuf {
    context_pack_dir(root, project_id, id).join("manifest.yaml")
}

pub fn runs_dir(root: &Path, project_id: ProjectId) -> PathBuf {
    project_dir(root, project_id).join("runs")
}

pub fn run_dir(root: &Path, project_id: ProjectId, id: RunId) -> PathBuf {
    runs_dir(root, project_id).join(id.as_str())
}

pub fn run_yaml_path(root: &Path, project_id: ProjectId, id: RunId) -> PathBuf {
    run_dir(root, project_id, id).join("run.yaml")
}

pub fn run_events_jsonl_path(root: &Path, project_id: ProjectId, id: RunId) -> PathBuf {
    run_dir(root, project_id, id).join("events.jsonl")
}

pub fn run_outputs_dir(root: &Path, project_id: ProjectId, id: RunId) -> PathBuf {
    run_dir(root, project_id, id).join("outputs")
}

pub fn share_packs_dir(root: &Path, project_id: ProjectId) -> PathBuf {
    project_dir(root, project_id).join("share_packs")
}

pub fn share_pack_dir(root: &Path, project_id: ProjectId, id: SharePackId) -> PathBuf {
    share_packs_dir(root, project_id).join(id.as_str())
}

pub fn share_pack_manifest_path(root: &Path, project_id: ProjectId, id: SharePackId) -> PathBuf {
    share_pack_dir(root, project_id, id).join("manifest.yaml")
}

pub fn inbox_dir(root: &Path) -> PathBuf {
    root.join("inbox")
}

pub fn reviews_dir(root: &Path) -> PathBuf {
    inbox_dir(root).join("reviews")
}

pub fn review_path(root: &Path, id: ReviewId) -> PathBuf {
    reviews_dir(root).join(format!("{id}.yaml"))
}

pub fn help_requests_dir(root: &Path) -> PathBuf {
    inbox_dir(root).join("help_requests")
}

pub fn local_dir(root: &Path) -> PathBuf {
    root.join(".local")
}

pub fn machine_yaml_path(root: &Path) -> PathBuf {
    local_dir(root).join("machine.yaml")
}

pub fn locks_dir(root: &Path) -> PathBuf {
    local_dir(root).join("locks")
}

pub fn workspace_lock_path(root: &Path) -> PathBuf {
    locks_dir(root).join("workspace.write.lock")
}

pub fn worktrees_dir(root: &Path) -> PathBuf {
    local_dir(root).join("worktrees")
}

pub fn index_sqlite_path(root: &Path) -> PathBuf {
    local_dir(root).join("index.sqlite")
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
