// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reviews are durable approval/denial decisions on a pending artifact.

use crate::enums::{ReviewDecision, Role};
use crate::ids::{ArtifactId, ReviewId};
use serde::{Deserialize, Serialize};

/// `inbox/reviews/<review_id>.yaml`. One review terminates a pending
/// artifact's inbox state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Review {
    pub schema_version: u32,
    pub id: ReviewId,
    pub created_at_ms: u64,
    /// The human principal or agent that resolved the review. A plain
    /// string rather than `AgentId` since the human principal has no
    /// agent record of its own.
    pub actor_id: String,
    pub actor_role: Role,
    pub decision: ReviewDecision,
    /// The artifact this review decides.
    pub subject: ArtifactId,
    /// The policy `rule_id` the enforcement gate matched when allowing
    /// this resolution to proceed.
    pub policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Review {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(
        actor_id: impl Into<String>,
        actor_role: Role,
        decision: ReviewDecision,
        subject: ArtifactId,
        policy: impl Into<String>,
        created_at_ms: u64,
    ) -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            id: ReviewId::new(),
            created_at_ms,
            actor_id: actor_id.into(),
            actor_role,
            decision,
            subject,
            policy: policy.into(),
            notes: None,
        }
    }

    crate::setters! {
        option {
            notes: String,
        }
    }
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod tests;
