// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The review inbox: a projection over pending artifacts plus the
//! `resolve` write path that decides one.
//!
//! `pending`/`recent_decisions` are thin wrappers over the `ac-index`
//! projection; this crate never recomputes them by walking the artifact
//! tree itself.

use crate::artifact::read_artifact;
use crate::atomic::write_file_atomic;
use crate::entities::agent::read_agent;
use crate::entities::run::read_run;
use crate::error::StorageError;
use crate::layout::{project_memory_md_path, review_path, run_events_jsonl_path};
use crate::lock::workspace_write_lock;
use crate::redaction::assert_no_sensitive_text;
use ac_core::{
    ApprovalDecidedPayload, ArtifactId, ArtifactType, EventKind, ProjectId, Review, ReviewDecision, Role, TeamId,
    Visibility,
};
use ac_eventlog::{Appender, NewEvent};
use ac_index::{ensure_synced, PendingReview, ReviewDecisionRow};
use ac_policy::{enforce, evaluate_policy, Action, Actor, Resource};
use chrono::Utc;
use std::path::Path;

/// Artifacts awaiting a decision, oldest first. `project_id` narrows to one
/// project; `None` returns the whole workspace.
pub fn pending(root: &Path, project_id: Option<&str>) -> Result<Vec<PendingReview>, StorageError> {
    let index = ensure_synced(root)?;
    Ok(index.pending_reviews(project_id)?)
}

/// Decided reviews, most recently decided first.
pub fn recent_decisions(root: &Path, project_id: Option<&str>, limit: u32) -> Result<Vec<ReviewDecisionRow>, StorageError> {
    let index = ensure_synced(root)?;
    Ok(index.recent_decisions(project_id, limit)?)
}

/// Resolve a pending artifact: policy-gate the decision, redact-check
/// `notes`, write the review, apply a memory-delta's patch on approval, and
/// emit `approval.decided` to the originating run's log.
#[allow(clippy::too_many_arguments)]
pub fn resolve(
    root: &Path,
    project_id: ProjectId,
    artifact_id: ArtifactId,
    decision: ReviewDecision,
    actor_id: impl Into<String>,
    actor_role: Role,
    actor_team_id: Option<TeamId>,
    notes: Option<String>,
    resolved_at_ms: u64,
) -> Result<Review, StorageError> {
    let actor_id = actor_id.into();
    let (artifact, body) = read_artifact(root, project_id, artifact_id)?;

    if let Some(notes) = &notes {
        assert_no_sensitive_text(notes, "review.notes")?;
    }

    let produced_by_team_id = read_agent(root, artifact.produced_by).ok().and_then(|a| a.team_id);

    let mut resource = Resource::new(artifact.id.to_string(), artifact.visibility)
        .with_kind(artifact.kind.to_string())
        .with_producing_actor(artifact.produced_by.to_string());
    if let Some(team_id) = produced_by_team_id {
        resource = resource.with_team(team_id);
    }

    let mut actor = Actor::new(actor_id.clone(), actor_role);
    if let Some(team_id) = actor_team_id {
        actor = actor.with_team(team_id);
    }

    let _lock = workspace_write_lock(root)?;
    let run = read_run(root, project_id, artifact.run_id)?;
    if run.is_terminal() {
        return Err(StorageError::RunTerminal { run_id: run.id.to_string(), status: run.status.to_string() });
    }
    let events_path = run_events_jsonl_path(root, project_id, artifact.run_id);
    enforce(&actor, Action::Approve, &resource, Some(artifact.run_id), Some(run.status), Some(&events_path))?;
    let policy_rule_id = evaluate_policy(&actor, Action::Approve, &resource).rule_id;

    let mut review = Review::new(actor_id, actor_role, decision, artifact.id, policy_rule_id, resolved_at_ms);
    if let Some(notes) = notes {
        review = review.notes(notes);
    }
    write_file_atomic(&review_path(root, review.id), serde_yaml::to_string(&review)?.as_bytes())?;

    if decision == ReviewDecision::Approved && artifact.kind == ArtifactType::MemoryDelta {
        apply_memory_delta(root, project_id, &body)?;
    }

    let mut appender = Appender::open(&events_path)?;
    let new_event = NewEvent {
        correlation_id: artifact.run_id.to_string(),
        causation_id: Some(review.id.to_string()),
        session_ref: None,
        actor: review.actor_id.clone(),
        visibility: Visibility::Managers,
        kind: EventKind::ApprovalDecided(ApprovalDecidedPayload { review_id: review.id, subject: artifact.id, decision }),
    };
    appender.append(artifact.run_id, new_event, Utc::now(), resolved_at_ms)?;

    Ok(review)
}

/// Apply an approved memory-delta's body to the project's running memory
/// file. The artifact body (already validated against `## Change` /
/// `## Justification`) is the patch content; there is no separate
/// front-matter pointer to a target file, so the project's own `memory.md`
/// is the fixed target for every memory-delta in that project.
fn apply_memory_delta(root: &Path, project_id: ProjectId, patch_body: &str) -> Result<(), StorageError> {
    assert_no_sensitive_text(patch_body, "memory_delta.patch")?;
    let path = project_memory_md_path(root, project_id);
    let mut existing = std::fs::read_to_string(&path).unwrap_or_default();
    if !existing.is_empty() && !existing.ends_with('\n') {
        existing.push('\n');
    }
    existing.push_str(patch_body.trim_end_matches('\n'));
    existing.push('\n');
    write_file_atomic(&path, existing.as_bytes())
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod tests;
