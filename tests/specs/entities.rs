// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Team / agent / project / task CRUD through the CLI, covering the
//! identifiers minted by one command feeding the next.

use crate::prelude::*;
use serde_json::Value;

fn id_of(json: &str) -> String {
    let value: Value = serde_json::from_str(json).expect("parse json output");
    value["id"].as_str().expect("id field present").to_string()
}

#[test]
fn team_create_then_show_round_trips() {
    let ws = Workspace::initialized("Acme");
    let created = ws.ac().args(["--output", "json", "team", "create", "Platform"]).passes();
    let id = id_of(&created);

    ws.ac().args(["team", "show", &id]).passes().stdout_has("Platform");
}

#[test]
fn agent_create_links_to_its_team() {
    let ws = Workspace::initialized("Acme");
    let team_id = id_of(&ws.ac().args(["--output", "json", "team", "create", "Platform"]).passes());

    let agent_json = ws
        .ac()
        .args([
            "--output",
            "json",
            "agent",
            "create",
            "Ada",
            "--role",
            "worker",
            "--provider",
            "shell",
            "--launcher",
            "run.sh",
            "--team",
            &team_id,
        ])
        .passes();
    let value: Value = serde_json::from_str(&agent_json).expect("parse json output");
    assert_eq!(value["team_id"].as_str(), Some(team_id.as_str()));
    assert_eq!(value["name"].as_str(), Some("Ada"));
}

#[test]
fn project_create_show_archive_transitions_status() {
    let ws = Workspace::initialized("Acme");
    let id = id_of(&ws.ac().args(["--output", "json", "project", "create", "Launchpad"]).passes());

    ws.ac().args(["project", "show", &id]).passes().stdout_has("Launchpad");

    let archived = ws.ac().args(["--output", "json", "project", "archive", &id]).passes();
    let value: Value = serde_json::from_str(&archived).expect("parse json output");
    assert_eq!(value["status"].as_str(), Some("archived"));
}

#[test]
fn task_create_set_status_show_reflects_the_new_status() {
    let ws = Workspace::initialized("Acme");
    let project_id = id_of(&ws.ac().args(["--output", "json", "project", "create", "Launchpad"]).passes());

    let task_id = id_of(
        &ws.ac()
            .args(["--output", "json", "task", "create", "--project", &project_id, "Write the README"])
            .passes(),
    );

    ws.ac().args(["task", "set-status", "--project", &project_id, &task_id, "in-progress"]).passes();

    ws.ac()
        .args(["task", "show", "--project", &project_id, &task_id])
        .passes()
        .stdout_has("in_progress");
}

#[test]
fn showing_an_unknown_agent_fails() {
    let ws = Workspace::initialized("Acme");
    ws.ac().args(["agent", "show", "agt_01jxxxxxxxxxxxxxxxxxxxxxxx"]).fails_with(1);
}
