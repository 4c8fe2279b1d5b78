// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::artifact::create_artifact;
use crate::entities::agent::{create_agent, NewAgent};
use crate::entities::project::create_project;
use crate::entities::run::{finalize_run, start_run};
use crate::init::init;
use ac_core::test_support::body_with_required_headings;
use ac_core::{AgentRole, ContextCycles, RunStatus, TokenUsage, UsageConfidence, UsageSource};
use tempfile::tempdir;

fn new_director_agent() -> NewAgent {
    NewAgent { name: "Director Dana".to_string(), role: AgentRole::Director, provider: "codex".to_string(), launcher: "codex_app_server".to_string(), team_id: None }
}

fn new_worker_agent() -> NewAgent {
    NewAgent { name: "Worker Wendy".to_string(), role: AgentRole::Worker, provider: "codex".to_string(), launcher: "codex_app_server".to_string(), team_id: None }
}

#[test]
fn resolve_approved_memory_delta_appends_to_project_memory_and_emits_event() {
    let dir = tempdir().unwrap();
    init(dir.path(), "Acme", false).unwrap();

    let project = create_project(dir.path(), "Checkout Revamp", 1_000).unwrap();
    let producer = create_agent(dir.path(), new_worker_agent(), 1_000).unwrap();
    let (run, pack) =
        start_run(dir.path(), project.id, producer.id, "codex", serde_json::json!({}), 1_000).unwrap();

    let body = body_with_required_headings(ArtifactType::MemoryDelta);
    let artifact = create_artifact(
        dir.path(),
        project.id,
        ArtifactType::MemoryDelta,
        "Remember the retry budget",
        Visibility::Team,
        producer.id,
        run.id,
        pack.id,
        &body,
        1_500,
    )
    .unwrap();

    let director = create_agent(dir.path(), new_director_agent(), 1_000).unwrap();
    let review = resolve(
        dir.path(),
        project.id,
        artifact.id,
        ReviewDecision::Approved,
        director.id.to_string(),
        Role::Director,
        None,
        Some("looks good".to_string()),
        2_000,
    )
    .unwrap();

    assert_eq!(review.decision, ReviewDecision::Approved);
    assert_eq!(review.subject, artifact.id);

    let memory = std::fs::read_to_string(project_memory_md_path(dir.path(), project.id)).unwrap();
    assert!(memory.contains("## Change"));

    let events = ac_eventlog::replay(&run_events_jsonl_path(dir.path(), project.id, run.id)).unwrap();
    assert!(events.events.iter().any(|e| e.kind.type_name() == "approval.decided"));
}

#[test]
fn resolve_rejects_when_actor_role_lacks_approve_permission() {
    let dir = tempdir().unwrap();
    init(dir.path(), "Acme", false).unwrap();

    let project = create_project(dir.path(), "Checkout Revamp", 1_000).unwrap();
    let producer = create_agent(dir.path(), new_worker_agent(), 1_000).unwrap();
    let (run, pack) =
        start_run(dir.path(), project.id, producer.id, "codex", serde_json::json!({}), 1_000).unwrap();

    let body = body_with_required_headings(ArtifactType::MemoryDelta);
    let artifact = create_artifact(
        dir.path(),
        project.id,
        ArtifactType::MemoryDelta,
        "Remember the retry budget",
        Visibility::Team,
        producer.id,
        run.id,
        pack.id,
        &body,
        1_500,
    )
    .unwrap();

    let err = resolve(
        dir.path(),
        project.id,
        artifact.id,
        ReviewDecision::Approved,
        "worker-actor",
        Role::Worker,
        None,
        None,
        2_000,
    )
    .unwrap_err();

    assert!(matches!(err, StorageError::PolicyDenied(_)));
}

#[test]
fn resolve_rejects_notes_containing_a_secret() {
    let dir = tempdir().unwrap();
    init(dir.path(), "Acme", false).unwrap();

    let project = create_project(dir.path(), "Checkout Revamp", 1_000).unwrap();
    let producer = create_agent(dir.path(), new_worker_agent(), 1_000).unwrap();
    let (run, pack) =
        start_run(dir.path(), project.id, producer.id, "codex", serde_json::json!({}), 1_000).unwrap();

    let body = body_with_required_headings(ArtifactType::MemoryDelta);
    let artifact = create_artifact(
        dir.path(),
        project.id,
        ArtifactType::MemoryDelta,
        "Remember the retry budget",
        Visibility::Team,
        producer.id,
        run.id,
        pack.id,
        &body,
        1_500,
    )
    .unwrap();

    let director = create_agent(dir.path(), new_director_agent(), 1_000).unwrap();
    let err = resolve(
        dir.path(),
        project.id,
        artifact.id,
        ReviewDecision::Approved,
        director.id.to_string(),
        Role::Director,
        None,
        Some("use sk-abcdefghijklmnopqrstuvwxyz012345".to_string()),
        2_000,
    )
    .unwrap_err();

    assert!(matches!(err, StorageError::SensitiveText(_)));
    assert!(!review_dir_has_entries(dir.path()));
}

#[test]
fn resolve_rejects_when_run_is_terminal() {
    let dir = tempdir().unwrap();
    init(dir.path(), "Acme", false).unwrap();

    let project = create_project(dir.path(), "Checkout Revamp", 1_000).unwrap();
    let producer = create_agent(dir.path(), new_worker_agent(), 1_000).unwrap();
    let (run, pack) =
        start_run(dir.path(), project.id, producer.id, "codex", serde_json::json!({}), 1_000).unwrap();

    let body = body_with_required_headings(ArtifactType::MemoryDelta);
    let artifact = create_artifact(
        dir.path(),
        project.id,
        ArtifactType::MemoryDelta,
        "Remember the retry budget",
        Visibility::Team,
        producer.id,
        run.id,
        pack.id,
        &body,
        1_500,
    )
    .unwrap();

    let usage = TokenUsage {
        input: 1,
        cached_input: 0,
        output: 1,
        reasoning_output: 0,
        total: 2,
        source: UsageSource::EstimatedChars,
        confidence: Some(UsageConfidence::Low),
        cost_usd: None,
        cost_source: None,
    };
    finalize_run(dir.path(), project.id, run.id, RunStatus::Ended, 1_800, usage, ContextCycles::unavailable(), Some(0))
        .unwrap();

    let director = create_agent(dir.path(), new_director_agent(), 1_000).unwrap();
    let err = resolve(
        dir.path(),
        project.id,
        artifact.id,
        ReviewDecision::Approved,
        director.id.to_string(),
        Role::Director,
        None,
        None,
        2_000,
    )
    .unwrap_err();

    assert!(matches!(err, StorageError::RunTerminal { .. }));

    let events = ac_eventlog::replay(&run_events_jsonl_path(dir.path(), project.id, run.id)).unwrap();
    assert!(
        !events.events.iter().any(|e| e.kind.type_name() == "approval.decided"),
        "a terminal run's events.jsonl must not receive a new approval.decided event"
    );
}

fn review_dir_has_entries(root: &std::path::Path) -> bool {
    std::fs::read_dir(crate::layout::reviews_dir(root)).unwrap().next().is_some()
}
