// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_agent_has_no_team_by_default() {
    let agent = Agent::new("Worker", AgentRole::Worker, "codex", "codex-cli", 1_000);
    assert!(agent.team_id.is_none());
    assert!(agent.model_hint.is_none());
}

#[test]
fn setters_attach_team_and_model_hint() {
    let team_id = TeamId::new();
    let agent = Agent::new("Worker", AgentRole::Worker, "codex", "codex-cli", 1_000)
        .team_id(team_id)
        .model_hint("gpt-5-high");
    assert_eq!(agent.team_id, Some(team_id));
    assert_eq!(agent.model_hint.as_deref(), Some("gpt-5-high"));
}

#[test]
fn role_round_trips_to_snake_case_json() {
    let agent = Agent::new("Director", AgentRole::Director, "claude", "claude-cli", 1_000);
    let json = serde_json::to_value(&agent).unwrap();
    assert_eq!(json["role"], "director");
}

#[test]
fn file_set_includes_journal_and_agent_yaml() {
    assert!(AgentFileSet::RELATIVE_PATHS.contains(&"journal.md"));
    assert!(AgentFileSet::RELATIVE_PATHS.contains(&"agent.yaml"));
}
