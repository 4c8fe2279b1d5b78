// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `work/projects/<project_id>/runs/<run_id>/` CRUD: `run.yaml`, `outputs/`,
//! and the hash-chained `events.jsonl` lifecycle events.
//!
//! Enforces the terminal-state invariant: once a run's status is terminal
//! (`ended`/`failed`/`stopped`), no further event may be appended and
//! `run.yaml` may no longer be rewritten.

use super::context_pack::write_context_pack;
use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::{run_dir, run_events_jsonl_path, run_outputs_dir, run_yaml_path};
use crate::lock::workspace_write_lock;
use ac_core::{
    AgentId, ContextCycles, ContextPack, EventKind, ProjectId, Run, RunEndedPayload, RunFailedPayload, RunId,
    RunStartedPayload, RunStatus, RunStoppedPayload, TokenUsage, Visibility,
};
use ac_eventlog::{Appender, NewEvent};
use chrono::Utc;
use std::path::Path;

fn terminal_error(run: &Run) -> StorageError {
    StorageError::RunTerminal { run_id: run.id.to_string(), status: run.status.to_string() }
}

/// Start a run and the context pack bound 1:1 to it: mint both ids together
/// (a run always owns exactly one pack, a pack always belongs to exactly one
/// run, so neither can be created standalone first), write the pack
/// manifest and `run.yaml`, create `outputs/`, and append `run.started`.
pub fn start_run(
    root: &Path,
    project_id: ProjectId,
    agent_id: AgentId,
    provider: impl Into<String>,
    spec: serde_json::Value,
    created_at_ms: u64,
) -> Result<(Run, ContextPack), StorageError> {
    let _lock = workspace_write_lock(root)?;

    let run_id = RunId::new();
    let pack = ContextPack::new(run_id, project_id, agent_id, created_at_ms);
    write_context_pack(root, &pack)?;

    let run = Run {
        schema_version: Run::CURRENT_SCHEMA_VERSION,
        id: run_id,
        project_id,
        agent_id,
        provider: provider.into(),
        status: RunStatus::Running,
        created_at_ms,
        ended_at_ms: None,
        usage: None,
        context_cycles: None,
        context_pack_id: pack.id,
        events_relpath: format!("runs/{run_id}/events.jsonl"),
        spec,
    };

    std::fs::create_dir_all(run_outputs_dir(root, project_id, run.id))
        .map_err(|e| StorageError::io(run_outputs_dir(root, project_id, run.id), e))?;
    write_file_atomic(&run_yaml_path(root, project_id, run.id), serde_yaml::to_string(&run)?.as_bytes())?;

    let mut appender = Appender::open(&run_events_jsonl_path(root, project_id, run.id))?;
    append_event(&mut appender, &run, agent_id, EventKind::RunStarted(RunStartedPayload {}), created_at_ms)?;

    Ok((run, pack))
}

pub fn read_run(root: &Path, project_id: ProjectId, id: RunId) -> Result<Run, StorageError> {
    let path = run_yaml_path(root, project_id, id);
    let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
    Ok(serde_yaml::from_str(&raw)?)
}

/// Append a provider-raw event to a running run's log. Refuses once the
/// run has reached a terminal status.
pub fn append_provider_raw(
    root: &Path,
    project_id: ProjectId,
    id: RunId,
    raw: serde_json::Value,
    ts_monotonic_ms: u64,
) -> Result<(), StorageError> {
    let _lock = workspace_write_lock(root)?;
    let run = read_run(root, project_id, id)?;
    if run.is_terminal() {
        return Err(terminal_error(&run));
    }

    let mut appender = Appender::open(&run_events_jsonl_path(root, project_id, id))?;
    append_event(
        &mut appender,
        &run,
        run.agent_id,
        EventKind::ProviderRaw(ac_core::ProviderRawPayload { raw }),
        ts_monotonic_ms,
    )
}

/// Transition a run to a terminal status: rewrite `run.yaml` and append the
/// matching `run.ended`/`run.failed`/`run.stopped` event. Refuses if the run
/// has already reached a terminal status.
pub fn finalize_run(
    root: &Path,
    project_id: ProjectId,
    id: RunId,
    status: RunStatus,
    ended_at_ms: u64,
    usage: TokenUsage,
    context_cycles: ContextCycles,
    exit_code: Option<i32>,
) -> Result<Run, StorageError> {
    let _lock = workspace_write_lock(root)?;
    let mut run = read_run(root, project_id, id)?;
    if run.is_terminal() {
        return Err(terminal_error(&run));
    }

    run.finalize(status, ended_at_ms, usage.clone(), context_cycles);
    write_file_atomic(&run_yaml_path(root, project_id, id), serde_yaml::to_string(&run)?.as_bytes())?;

    let kind = match status {
        RunStatus::Ended => EventKind::RunEnded(RunEndedPayload { usage, context_cycles }),
        RunStatus::Failed => EventKind::RunFailed(RunFailedPayload { usage, context_cycles, exit_code }),
        RunStatus::Stopped => EventKind::RunStopped(RunStoppedPayload { usage, context_cycles }),
        RunStatus::Running => unreachable!("finalize_run called with a non-terminal status"),
    };

    let mut appender = Appender::open(&run_events_jsonl_path(root, project_id, id))?;
    append_event(&mut appender, &run, run.agent_id, kind, ended_at_ms)?;

    Ok(run)
}

fn append_event(
    appender: &mut Appender,
    run: &Run,
    actor: AgentId,
    kind: EventKind,
    ts_monotonic_ms: u64,
) -> Result<(), StorageError> {
    let new_event = NewEvent {
        correlation_id: run.id.to_string(),
        causation_id: None,
        session_ref: None,
        actor: actor.to_string(),
        visibility: Visibility::Team,
        kind,
    };
    appender.append(run.id, new_event, Utc::now(), ts_monotonic_ms)?;
    Ok(())
}

pub fn run_dir_path(root: &Path, project_id: ProjectId, id: RunId) -> std::path::PathBuf {
    run_dir(root, project_id, id)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
