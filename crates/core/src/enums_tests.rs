// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn visibility_round_trips_through_json() {
    for v in [Visibility::PrivateAgent, Visibility::Team, Visibility::Managers, Visibility::Org] {
        let json = serde_json::to_string(&v).unwrap();
        let back: Visibility = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn visibility_rejects_unknown_string() {
    let err = serde_json::from_str::<Visibility>("\"public\"");
    assert!(err.is_err());
}

#[test]
fn role_manager_set_membership() {
    assert!(Role::Human.is_manager_set());
    assert!(Role::Ceo.is_manager_set());
    assert!(Role::Director.is_manager_set());
    assert!(Role::Manager.is_manager_set());
    assert!(!Role::Worker.is_manager_set());
}

#[test]
fn role_director_set_membership() {
    assert!(Role::Human.is_director_set());
    assert!(Role::Ceo.is_director_set());
    assert!(Role::Director.is_director_set());
    assert!(!Role::Manager.is_director_set());
    assert!(!Role::Worker.is_director_set());
}

#[test]
fn run_status_terminal_states() {
    assert!(!RunStatus::Running.is_terminal());
    assert!(RunStatus::Ended.is_terminal());
    assert!(RunStatus::Failed.is_terminal());
    assert!(RunStatus::Stopped.is_terminal());
}

#[test]
fn agent_role_converts_to_role() {
    assert_eq!(Role::from(AgentRole::Worker), Role::Worker);
    assert_eq!(Role::from(AgentRole::Ceo), Role::Ceo);
}

#[test]
fn artifact_type_serializes_snake_case() {
    let json = serde_json::to_string(&ArtifactType::MemoryDelta).unwrap();
    assert_eq!(json, "\"memory_delta\"");
}

#[test]
fn memory_delta_required_headings() {
    assert_eq!(ArtifactType::MemoryDelta.required_headings(), &["Change", "Justification"]);
}
