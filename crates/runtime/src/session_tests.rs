// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ac_core::{AgentId, MachineConfig, ProjectId};
use ac_storage::layout::run_events_jsonl_path;

fn params(root: &std::path::Path, argv: Vec<&str>) -> SessionParams {
    SessionParams {
        root: root.to_path_buf(),
        project_id: ProjectId::new(),
        agent_id: AgentId::new(),
        provider: "shell_test_provider".to_string(),
        command: BuiltCommand::new(argv.into_iter().map(str::to_string).collect()),
        machine: MachineConfig::new(),
    }
}

#[tokio::test]
async fn a_clean_exit_ends_the_run_and_captures_final_text() {
    let dir = tempfile::tempdir().unwrap();
    let p = params(dir.path(), vec!["sh", "-c", "echo hello"]);
    let project_id = p.project_id;

    let run = begin_run(&p).unwrap();
    let outcome = drive_session(p, run, CancellationToken::new()).await.unwrap();

    assert_eq!(outcome.run.status, RunStatus::Ended);
    assert_eq!(outcome.final_text, "hello");

    let events = ac_eventlog::replay(&run_events_jsonl_path(dir.path(), project_id, outcome.run.id)).unwrap();
    assert!(events.events.iter().any(|e| e.kind.type_name() == "run.started"));
    assert!(events.events.iter().any(|e| e.kind.type_name() == "run.ended"));
}

#[tokio::test]
async fn a_nonzero_exit_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let p = params(dir.path(), vec!["sh", "-c", "exit 7"]);

    let run = begin_run(&p).unwrap();
    let outcome = drive_session(p, run, CancellationToken::new()).await.unwrap();

    assert_eq!(outcome.run.status, RunStatus::Failed);
}

#[tokio::test]
async fn cancellation_stops_a_long_running_session() {
    let dir = tempfile::tempdir().unwrap();
    let p = params(dir.path(), vec!["sh", "-c", "sleep 30"]);

    let run = begin_run(&p).unwrap();
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel_clone.cancel();
    });

    let outcome = drive_session(p, run, cancel).await.unwrap();
    assert_eq!(outcome.run.status, RunStatus::Stopped);
}

#[tokio::test]
async fn cancellation_still_processes_output_written_after_sigterm() {
    let dir = tempfile::tempdir().unwrap();
    let p = params(dir.path(), vec!["sh", "-c", "trap 'echo after_sigterm; exit 0' TERM; sleep 30"]);
    let project_id = p.project_id;

    let run = begin_run(&p).unwrap();
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel_clone.cancel();
    });

    let outcome = drive_session(p, run, cancel).await.unwrap();
    assert_eq!(outcome.run.status, RunStatus::Stopped);

    let events = ac_eventlog::replay(&run_events_jsonl_path(dir.path(), project_id, outcome.run.id)).unwrap();
    let saw_post_sigterm_line = events.events.iter().any(|e| match &e.kind {
        ac_core::EventKind::ProviderRaw(payload) => payload.raw.as_str() == Some("after_sigterm"),
        _ => false,
    });
    assert!(saw_post_sigterm_line, "output written between SIGTERM and exit must still be read and logged");
}

#[tokio::test]
async fn json_usage_lines_are_extracted_into_the_finalized_run() {
    let dir = tempfile::tempdir().unwrap();
    let p = params(
        dir.path(),
        vec!["sh", "-c", r#"echo '{"usage":{"prompt_tokens":10,"completion_tokens":5,"total_tokens":15}}'"#],
    );

    let run = begin_run(&p).unwrap();
    let outcome = drive_session(p, run, CancellationToken::new()).await.unwrap();

    let usage = outcome.run.usage.expect("usage recorded");
    assert_eq!(usage.total, 15);
}

#[tokio::test]
async fn a_failing_spawn_surfaces_a_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = params(dir.path(), vec!["/nonexistent/binary/that/does/not/exist"]);

    let run = begin_run(&p).unwrap();
    let err = drive_session(p, run, CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, RuntimeError::Spawn { .. }));
}
