// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ac_core::ProjectId;
use tempfile::tempdir;

#[test]
fn create_then_read_roundtrips_front_matter_and_body() {
    let dir = tempdir().unwrap();
    let project_id = ProjectId::new();
    let task = create_task(dir.path(), project_id, "Ship it", Visibility::Team, 1_000).unwrap();

    let (loaded, body) = read_task(dir.path(), project_id, task.id).unwrap();
    assert_eq!(loaded.title, "Ship it");
    assert_eq!(loaded.status, TaskStatus::Draft);
    assert_eq!(body, "");
}

#[test]
fn set_task_status_preserves_body() {
    let dir = tempdir().unwrap();
    let project_id = ProjectId::new();
    let task = create_task(dir.path(), project_id, "Ship it", Visibility::Team, 1_000).unwrap();
    set_task_body(dir.path(), project_id, task.id, "## Plan\n\nDo the thing.\n").unwrap();

    let updated = set_task_status(dir.path(), project_id, task.id, TaskStatus::InProgress).unwrap();
    assert_eq!(updated.status, TaskStatus::InProgress);

    let (_, body) = read_task(dir.path(), project_id, task.id).unwrap();
    assert_eq!(body, "## Plan\n\nDo the thing.\n");
}
