// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ac_core::{AgentId, ProjectId, UsageSource};
use ac_eventlog::replay;

fn usage(total: u64) -> TokenUsage {
    TokenUsage {
        input: total,
        cached_input: 0,
        output: 0,
        reasoning_output: 0,
        total,
        source: UsageSource::ProviderReported,
        confidence: None,
        cost_usd: None,
        cost_source: None,
    }
}

#[test]
fn start_run_creates_outputs_dir_and_binds_its_context_pack() {
    let dir = tempfile::tempdir().unwrap();
    let project_id = ProjectId::new();
    let (run, pack) = start_run(dir.path(), project_id, AgentId::new(), "codex", serde_json::json!({}), 1_000).unwrap();

    assert!(run_outputs_dir(dir.path(), project_id, run.id).is_dir());
    assert_eq!(run.status, RunStatus::Running);
    assert_eq!(run.context_pack_id, pack.id);
    assert_eq!(pack.run_id, run.id);

    let result = replay(&run_events_jsonl_path(dir.path(), project_id, run.id)).unwrap();
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].kind.type_name(), "run.started");
}

#[test]
fn finalize_run_rejects_a_second_finalize() {
    let dir = tempfile::tempdir().unwrap();
    let project_id = ProjectId::new();
    let (run, _pack) =
        start_run(dir.path(), project_id, AgentId::new(), "codex", serde_json::json!({}), 1_000).unwrap();

    finalize_run(dir.path(), project_id, run.id, RunStatus::Ended, 2_000, usage(42), ContextCycles::unavailable(), None)
        .unwrap();

    let err =
        finalize_run(dir.path(), project_id, run.id, RunStatus::Ended, 3_000, usage(42), ContextCycles::unavailable(), None)
            .unwrap_err();
    assert!(matches!(err, StorageError::RunTerminal { .. }));
}

#[test]
fn append_provider_raw_rejected_after_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let project_id = ProjectId::new();
    let (run, _pack) =
        start_run(dir.path(), project_id, AgentId::new(), "codex", serde_json::json!({}), 1_000).unwrap();
    finalize_run(dir.path(), project_id, run.id, RunStatus::Failed, 2_000, usage(1), ContextCycles::unavailable(), Some(1))
        .unwrap();

    let err = append_provider_raw(dir.path(), project_id, run.id, serde_json::json!({"line": "x"}), 2_500).unwrap_err();
    assert!(matches!(err, StorageError::RunTerminal { .. }));
}
