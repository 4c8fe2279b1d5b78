// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_pack_has_no_repo_snapshot() {
    let pack = ContextPack::new(RunId::new(), ProjectId::new(), AgentId::new(), 1_000);
    assert!(pack.repo_snapshot.is_none());
    assert!(pack.included_docs.is_empty());
}

#[test]
fn repo_snapshot_setter_attaches_snapshot() {
    let snapshot = RepoSnapshot {
        repo_id: "monorepo".to_string(),
        head_sha: "abc123".to_string(),
        dirty: true,
        dirty_patch_artifact_id: Some(ArtifactId::new()),
    };
    let pack =
        ContextPack::new(RunId::new(), ProjectId::new(), AgentId::new(), 1_000).repo_snapshot(snapshot.clone());
    assert_eq!(pack.repo_snapshot, Some(snapshot));
}

#[test]
fn clean_repo_snapshot_has_no_patch_artifact() {
    let snapshot = RepoSnapshot {
        repo_id: "monorepo".to_string(),
        head_sha: "abc123".to_string(),
        dirty: false,
        dirty_patch_artifact_id: None,
    };
    let yaml = serde_yaml::to_string(&snapshot).unwrap();
    assert!(!yaml.contains("dirty_patch_artifact_id"));
}
