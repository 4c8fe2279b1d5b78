// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The review inbox, end to end: seed a memory-delta artifact the way a
//! run would produce one, then walk it through `ac review list` and
//! `ac review resolve`.

use crate::prelude::*;
use serde_json::Value;

/// Artifacts aren't minted by any CLI command (a driver writes them as a
/// run produces output), so this seeds one directly through the storage
/// crate the way a finished run's provider output would.
fn seed_pending_memory_delta(ws: &Workspace, project_id: ac_core::ProjectId, agent_id: ac_core::AgentId) -> ac_core::ArtifactId {
    let now = 1_700_000_000_000u64;
    let (run, pack) =
        ac_storage::entities::run::start_run(ws.root(), project_id, agent_id, "shell", serde_json::json!({}), now)
            .expect("start run");
    let artifact = ac_storage::artifact::create_artifact(
        ws.root(),
        project_id,
        ac_core::ArtifactType::MemoryDelta,
        "Record a new fact",
        ac_core::Visibility::Team,
        agent_id,
        run.id,
        pack.id,
        "## Change\nAdd a line to memory.\n\n## Justification\nWe learned something.\n",
        now,
    )
    .expect("create artifact");
    artifact.id
}

#[test]
fn list_shows_a_pending_artifact_then_resolve_clears_it() {
    let ws = Workspace::initialized("Acme");
    let project: Value =
        serde_json::from_str(&ws.ac().args(["--output", "json", "project", "create", "Launchpad"]).passes())
            .expect("parse project json");
    let agent: Value = serde_json::from_str(
        &ws.ac()
            .args(["--output", "json", "agent", "create", "Ada", "--role", "worker", "--provider", "shell", "--launcher", "sh"])
            .passes(),
    )
    .expect("parse agent json");
    let project_id = ac_core::ProjectId::from_string(project["id"].as_str().expect("project id"));
    let agent_id = ac_core::AgentId::from_string(agent["id"].as_str().expect("agent id"));

    let artifact_id = seed_pending_memory_delta(&ws, project_id, agent_id);

    ws.ac()
        .args(["review", "list", "--project", &project_id.to_string()])
        .passes()
        .stdout_has(&artifact_id.to_string());

    let resolved = ws
        .ac()
        .args([
            "--output",
            "json",
            "review",
            "resolve",
            "--project",
            &project_id.to_string(),
            &artifact_id.to_string(),
            "approved",
            "--actor-id",
            "operator",
            "--actor-role",
            "ceo",
        ])
        .passes();
    let value: Value = serde_json::from_str(&resolved).expect("parse review json");
    assert_eq!(value["decision"].as_str(), Some("approved"));

    ws.ac()
        .args(["review", "list", "--project", &project_id.to_string()])
        .passes()
        .stdout_has("no pending reviews");
}
