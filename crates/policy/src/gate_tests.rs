// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ac_core::{RunId, RunStatus};
use ac_eventlog::replay;
use tempfile::tempdir;

fn events_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("events.jsonl")
}

#[test]
fn allowed_request_returns_ok_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = events_path(&dir);
    let actor = Actor::new("agent_1", ac_core::Role::Worker);
    let resource = Resource::new("art_1", ac_core::Visibility::Org);

    let result = enforce(&actor, Action::Read, &resource, Some(RunId::new()), Some(RunStatus::Running), Some(&path));

    assert!(result.is_ok());
    assert!(!path.exists());
}

#[test]
fn denied_request_appends_policy_denied_event() {
    let dir = tempdir().unwrap();
    let path = events_path(&dir);
    let run_id = RunId::new();
    let actor = Actor::new("agent_1", ac_core::Role::Worker).with_team(ac_core::TeamId::new());
    let resource = Resource::new("art_1", ac_core::Visibility::Team).with_team(ac_core::TeamId::new());

    let err = enforce(&actor, Action::Read, &resource, Some(run_id), Some(RunStatus::Running), Some(&path)).unwrap_err();

    assert_eq!(err.rule_id, "vis.team.mismatch");
    assert_eq!(err.reason, "team_mismatch");

    let replayed = replay(&path).unwrap();
    assert_eq!(replayed.events.len(), 1);
    match &replayed.events[0].kind {
        ac_core::EventKind::PolicyDenied(payload) => {
            assert_eq!(payload.rule_id, "vis.team.mismatch");
            assert_eq!(payload.reason, "team_mismatch");
            assert_eq!(payload.resource_id, "art_1");
        }
        other => panic!("expected PolicyDenied, got {other:?}"),
    }
}

#[test]
fn denied_request_on_terminal_run_skips_audit_event() {
    let dir = tempdir().unwrap();
    let path = events_path(&dir);
    let run_id = RunId::new();
    let actor = Actor::new("agent_1", ac_core::Role::Worker).with_team(ac_core::TeamId::new());
    let resource = Resource::new("art_1", ac_core::Visibility::Team).with_team(ac_core::TeamId::new());

    let err = enforce(&actor, Action::Read, &resource, Some(run_id), Some(RunStatus::Ended), Some(&path)).unwrap_err();

    assert_eq!(err.rule_id, "vis.team.mismatch");
    assert!(!path.exists(), "a terminal run's events.jsonl must not be appended to");
}

#[test]
fn denied_request_without_run_context_skips_audit_event() {
    let actor = Actor::new("agent_1", ac_core::Role::Worker);
    let resource = Resource::new("art_1", ac_core::Visibility::Managers);

    let err = enforce(&actor, Action::Read, &resource, None, None, None).unwrap_err();

    assert_eq!(err.rule_id, "vis.managers.role");
}

#[test]
fn denial_is_returned_even_if_audit_path_is_unwritable() {
    // A directory can never be opened as the events file, so appending the
    // audit event fails; the denial itself must still surface.
    let dir = tempdir().unwrap();
    let bogus_path = dir.path().join("not_a_file");
    std::fs::create_dir(&bogus_path).unwrap();
    let run_id = RunId::new();
    let actor = Actor::new("agent_1", ac_core::Role::Worker);
    let resource = Resource::new("art_1", ac_core::Visibility::Managers);

    let err =
        enforce(&actor, Action::Read, &resource, Some(run_id), Some(RunStatus::Running), Some(&bogus_path)).unwrap_err();

    assert_eq!(err.rule_id, "vis.managers.role");
}
