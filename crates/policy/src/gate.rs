// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The enforcement gate: evaluates policy, and on denial, makes a
//! best-effort attempt to record why before failing the caller's request.

use crate::decision::{evaluate_policy, Action, Actor, PolicyDecision, Resource};
use ac_core::{PolicyDeniedPayload, RunId, RunStatus, Visibility};
use ac_eventlog::{Appender, NewEvent};
use chrono::Utc;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// A request denied by policy. The audit event emission is best-effort: if
/// it fails, that failure is logged but never swallows the denial itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("policy denied {rule_id}: {reason}")]
pub struct PolicyDenied {
    pub rule_id: &'static str,
    pub reason: &'static str,
}

/// Evaluate policy and, on denial, best-effort append a `policy.denied`
/// event to the run's log at `events_path` before returning the error.
/// `events_path` is `None` when the request has no associated run (e.g. a
/// read outside any run context), in which case denial is still returned
/// but no audit event is attempted.
///
/// `run_status` is the caller's already-loaded `run.yaml.status` for
/// `run_id` (the caller owns reading `run.yaml`, per the architectural note
/// in `ac-storage`'s grounding ledger — this crate has no file-reading
/// dependency of its own). Per spec §4.C, appending after a terminal status
/// is an error, so a terminal run's audit event is skipped rather than
/// attempted; the underlying denial is still returned either way.
pub fn enforce(
    actor: &Actor,
    action: Action,
    resource: &Resource,
    run_id: Option<RunId>,
    run_status: Option<RunStatus>,
    events_path: Option<&Path>,
) -> Result<(), PolicyDenied> {
    let decision = evaluate_policy(actor, action, resource);
    if decision.allowed {
        return Ok(());
    }

    if let (Some(run_id), Some(path)) = (run_id, events_path) {
        if run_status.is_some_and(|s| s.is_terminal()) {
            warn!(
                rule_id = decision.rule_id,
                run_id = %run_id,
                "run already terminal, skipping policy.denied audit event"
            );
        } else if let Err(e) = record_denial(path, run_id, actor, action, resource, &decision) {
            warn!(error = %e, rule_id = decision.rule_id, "failed to append policy.denied audit event");
        }
    }

    Err(PolicyDenied { rule_id: decision.rule_id, reason: decision.reason })
}

fn record_denial(
    path: &Path,
    run_id: RunId,
    actor: &Actor,
    action: Action,
    resource: &Resource,
    decision: &PolicyDecision,
) -> Result<(), ac_eventlog::EventLogError> {
    let mut appender = Appender::open(path)?;
    let new_event = NewEvent {
        correlation_id: run_id.to_string(),
        causation_id: None,
        session_ref: None,
        actor: actor.actor_id.clone(),
        visibility: Visibility::Managers,
        kind: ac_core::EventKind::PolicyDenied(PolicyDeniedPayload {
            action: action.as_str().to_string(),
            resource_id: resource.resource_id.clone(),
            rule_id: decision.rule_id.to_string(),
            reason: decision.reason.to_string(),
        }),
    };
    appender.append(run_id, new_event, Utc::now(), 0)?;
    Ok(())
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
