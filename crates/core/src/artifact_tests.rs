// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn new_artifact(kind: ArtifactType) -> Artifact {
    Artifact::new(
        kind,
        "Memory update",
        Visibility::Team,
        AgentId::new(),
        RunId::new(),
        ContextPackId::new(),
        1_000,
    )
}

#[test]
fn validate_body_passes_with_required_headings() {
    let artifact = new_artifact(ArtifactType::MemoryDelta);
    let body = "## Change\n\nAdd a note.\n\n## Justification\n\nBecause.\n";
    assert!(artifact.validate_body(body).is_ok());
}

#[test]
fn validate_body_fails_when_heading_missing() {
    let artifact = new_artifact(ArtifactType::MemoryDelta);
    let body = "## Change\n\nAdd a note.\n";
    let err = artifact.validate_body(body).unwrap_err();
    assert!(matches!(err, SchemaError::MissingHeading { heading: "Justification", .. }));
}

#[test]
fn type_field_serializes_as_type_not_kind() {
    let artifact = new_artifact(ArtifactType::Proposal);
    let json = serde_json::to_value(&artifact).unwrap();
    assert_eq!(json["type"], "proposal");
    assert!(json.get("kind").is_none());
}
