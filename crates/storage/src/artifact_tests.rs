// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::layout::artifacts_dir;
use ac_core::test_support::{body_with_required_headings, ArtifactFixture};
use tempfile::tempdir;

#[test]
fn create_artifact_with_required_headings_succeeds() {
    let dir = tempdir().unwrap();
    let fx = ArtifactFixture::new();
    let body = body_with_required_headings(ArtifactType::MemoryDelta);

    let artifact = create_artifact(
        dir.path(),
        fx.project_id,
        ArtifactType::MemoryDelta,
        "Fix the retry loop",
        Visibility::Team,
        fx.agent_id,
        fx.run_id,
        fx.context_pack_id,
        &body,
        1_000,
    )
    .unwrap();

    let (loaded, loaded_body) = read_artifact(dir.path(), fx.project_id, artifact.id).unwrap();
    assert_eq!(loaded.title, "Fix the retry loop");
    assert_eq!(loaded_body.trim(), body.trim());
}

#[test]
fn create_artifact_missing_required_heading_is_rejected_before_any_write() {
    let dir = tempdir().unwrap();
    let fx = ArtifactFixture::new();

    let err = create_artifact(
        dir.path(),
        fx.project_id,
        ArtifactType::MemoryDelta,
        "Fix the retry loop",
        Visibility::Team,
        fx.agent_id,
        fx.run_id,
        fx.context_pack_id,
        "no headings here",
        1_000,
    )
    .unwrap_err();

    assert!(matches!(err, StorageError::Schema(_)));
    assert!(!artifacts_dir(dir.path(), fx.project_id).exists());
}
