// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session launch and replay through `ac run`, using `sh` as a stand-in
//! provider so these tests don't depend on any real agent CLI being
//! installed.

use crate::prelude::*;
use serde_json::Value;

fn create_project_and_agent(ws: &Workspace) -> (String, String) {
    let project: Value =
        serde_json::from_str(&ws.ac().args(["--output", "json", "project", "create", "Launchpad"]).passes())
            .expect("parse project json");
    let agent: Value = serde_json::from_str(
        &ws.ac()
            .args(["--output", "json", "agent", "create", "Ada", "--role", "worker", "--provider", "shell", "--launcher", "sh"])
            .passes(),
    )
    .expect("parse agent json");
    (project["id"].as_str().expect("project id").to_string(), agent["id"].as_str().expect("agent id").to_string())
}

#[test]
fn launch_runs_a_shell_command_and_captures_its_output() {
    let ws = Workspace::initialized("Acme");
    let (project_id, agent_id) = create_project_and_agent(&ws);

    let stdout = ws
        .ac()
        .args(["run", "launch", "--project", &project_id, "--agent", &agent_id, "--provider", "sh", "--", "sh", "-c", "echo hello-from-run"])
        .passes();
    stdout_has_once(&stdout, "hello-from-run");
}

fn stdout_has_once(stdout: &str, needle: &str) {
    assert!(stdout.contains(needle), "expected {needle:?} in {stdout:?}");
}

#[test]
fn launch_then_events_replays_the_started_and_ended_events() {
    let ws = Workspace::initialized("Acme");
    let (project_id, agent_id) = create_project_and_agent(&ws);

    let run_json = ws
        .ac()
        .args([
            "--output",
            "json",
            "run",
            "launch",
            "--project",
            &project_id,
            "--agent",
            &agent_id,
            "--provider",
            "sh",
            "--",
            "sh",
            "-c",
            "echo ok",
        ])
        .passes();
    let run: Value = serde_json::from_str(&run_json).expect("parse run json");
    let run_id = run["id"].as_str().expect("run id").to_string();
    assert_eq!(run["status"].as_str(), Some("ended"));

    let events_json =
        ws.ac().args(["--output", "json", "run", "events", "--project", &project_id, &run_id]).passes();
    let events: Value = serde_json::from_str(&events_json).expect("parse events json");
    let kinds: Vec<&str> = events.as_array().expect("events array").iter().map(|e| e["type"].as_str().unwrap_or_default()).collect();
    assert!(kinds.contains(&"run_started"), "events: {kinds:?}");
    assert!(kinds.contains(&"run_ended"), "events: {kinds:?}");
}

#[test]
fn run_list_reflects_launched_runs() {
    let ws = Workspace::initialized("Acme");
    let (project_id, agent_id) = create_project_and_agent(&ws);

    ws.ac()
        .args(["run", "launch", "--project", &project_id, "--agent", &agent_id, "--provider", "sh", "--", "sh", "-c", "echo one"])
        .passes();

    ws.ac().args(["run", "list", "--project", &project_id]).passes().stdout_has("ended");
}

#[test]
fn a_nonzero_exit_is_reported_as_a_failed_run() {
    let ws = Workspace::initialized("Acme");
    let (project_id, agent_id) = create_project_and_agent(&ws);

    let run_json = ws
        .ac()
        .args([
            "--output",
            "json",
            "run",
            "launch",
            "--project",
            &project_id,
            "--agent",
            &agent_id,
            "--provider",
            "sh",
            "--",
            "sh",
            "-c",
            "exit 3",
        ])
        .passes();
    let run: Value = serde_json::from_str(&run_json).expect("parse run json");
    assert_eq!(run["status"].as_str(), Some("failed"));
}
