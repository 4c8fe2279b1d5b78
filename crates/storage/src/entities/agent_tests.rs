// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::layout::agent_dir;
use tempfile::tempdir;

fn new_agent() -> NewAgent {
    NewAgent {
        name: "Worker Bee".to_string(),
        role: AgentRole::Worker,
        provider: "codex".to_string(),
        launcher: "codex_app_server".to_string(),
        team_id: None,
    }
}

#[test]
fn create_writes_agent_yaml_and_every_sibling_file() {
    let dir = tempdir().unwrap();
    let agent = create_agent(dir.path(), new_agent(), 1_000).unwrap();

    for relative in ac_core::AgentFileSet::RELATIVE_PATHS {
        assert!(agent_dir(dir.path(), agent.id).join(relative).exists(), "missing {relative}");
    }

    let loaded = read_agent(dir.path(), agent.id).unwrap();
    assert_eq!(loaded.name, "Worker Bee");
    assert_eq!(loaded.role, AgentRole::Worker);
}

#[test]
fn create_with_team_id_persists_it() {
    let dir = tempdir().unwrap();
    let team_id = TeamId::new();
    let mut new = new_agent();
    new.team_id = Some(team_id);

    let agent = create_agent(dir.path(), new, 1_000).unwrap();
    assert_eq!(agent.team_id, Some(team_id));

    let loaded = read_agent(dir.path(), agent.id).unwrap();
    assert_eq!(loaded.team_id, Some(team_id));
}

#[test]
fn append_journal_line_accumulates_across_calls() {
    let dir = tempdir().unwrap();
    let agent = create_agent(dir.path(), new_agent(), 1_000).unwrap();

    append_journal_line(dir.path(), agent.id, "first entry").unwrap();
    append_journal_line(dir.path(), agent.id, "second entry").unwrap();

    let journal = std::fs::read_to_string(agent_journal_path(dir.path(), agent.id)).unwrap();
    assert_eq!(journal, "first entry\nsecond entry\n");
}
