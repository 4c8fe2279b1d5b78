// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_project_is_active() {
    let project = Project::new("Ledger Rewrite", 1_000);
    assert_eq!(project.status, ProjectStatus::Active);
}

#[test]
fn archive_transitions_status() {
    let mut project = Project::new("Ledger Rewrite", 1_000);
    project.archive();
    assert_eq!(project.status, ProjectStatus::Archived);
}

#[test]
fn relative_dirs_cover_every_owned_subtree() {
    for dir in ["tasks", "artifacts", "context_packs", "runs", "share_packs"] {
        assert!(PROJECT_RELATIVE_DIRS.contains(&dir));
    }
}
