// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifacts are immutable markdown-with-front-matter documents produced by
//! a run. "Edits" always create a new artifact.

use crate::enums::{ArtifactType, Visibility};
use crate::error::SchemaError;
use crate::ids::{AgentId, ArtifactId, ContextPackId, RunId};
use serde::{Deserialize, Serialize};

/// The YAML front matter of `work/projects/<project_id>/artifacts/<id>.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Artifact {
    pub schema_version: u32,
    #[serde(rename = "type")]
    pub kind: ArtifactType,
    pub id: ArtifactId,
    pub created_at_ms: u64,
    pub title: String,
    pub visibility: Visibility,
    pub produced_by: AgentId,
    pub run_id: RunId,
    pub context_pack_id: ContextPackId,
}

impl Artifact {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(
        kind: ArtifactType,
        title: impl Into<String>,
        visibility: Visibility,
        produced_by: AgentId,
        run_id: RunId,
        context_pack_id: ContextPackId,
        created_at_ms: u64,
    ) -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            kind,
            id: ArtifactId::new(),
            created_at_ms,
            title: title.into(),
            visibility,
            produced_by,
            run_id,
            context_pack_id,
        }
    }

    /// Checks that `body` contains every `##` heading [`ArtifactType::required_headings`]
    /// mandates for this artifact's kind. Used both when minting a new artifact
    /// and by workspace `validate()`.
    pub fn validate_body(&self, body: &str) -> Result<(), SchemaError> {
        for &heading in self.kind.required_headings() {
            let needle = format!("## {heading}");
            if !body.contains(&needle) {
                return Err(SchemaError::MissingHeading { entity: "artifact", heading });
            }
        }
        Ok(())
    }
}

/// Artifact kinds that park in the review inbox until a human or manager-set
/// actor decides them. Centralized here (rather than scattered at call
/// sites) per the open question in spec §9; both `ac-storage`'s review
/// projection and `ac-index`'s `pending_reviews` rebuild consult this list.
pub const REVIEW_REQUIRED_ARTIFACT_TYPES: &[ArtifactType] =
    &[ArtifactType::MemoryDelta, ArtifactType::HeartbeatActionProposal];

impl ArtifactType {
    /// Whether an artifact of this kind parks in the review inbox until
    /// resolved, per [`REVIEW_REQUIRED_ARTIFACT_TYPES`].
    pub fn requires_review(self) -> bool {
        REVIEW_REQUIRED_ARTIFACT_TYPES.contains(&self)
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
