// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess session runtime (spec §4.F): launches a provider CLI,
//! streams its stdout/stderr as `provider.raw` events, feeds the usage
//! extractor and cycle detector, and finalizes the run record on exit.

use crate::command::BuiltCommand;
use crate::cycles::CycleDetector;
use crate::error::RuntimeError;
use crate::usage::{apply_rate_card, UsageExtractor};
use ac_core::{AgentId, MachineConfig, ProjectId, Run, RunId, RunStatus};
use ac_storage::entities::run as run_entity;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;

/// Grace period between SIGTERM and SIGKILL on cancellation (spec §4.F).
const CANCEL_GRACE: Duration = Duration::from_secs(5);

/// Everything [`begin_run`]/[`drive_session`] need beyond the built command:
/// where the run lives and how to price it.
pub struct SessionParams {
    pub root: PathBuf,
    pub project_id: ProjectId,
    pub agent_id: AgentId,
    pub provider: String,
    pub command: BuiltCommand,
    pub machine: MachineConfig,
}

/// The fully-finalized run record, returned once a session reaches a
/// terminal status, together with its computed final answer text.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub run: Run,
    pub final_text: String,
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Start the run record (and its bound context pack) synchronously. Split
/// out from [`drive_session`] so a caller (the session registry) can learn
/// the `run_id` before the child process ever spawns, without waiting on
/// the async streaming loop.
pub fn begin_run(params: &SessionParams) -> Result<Run, RuntimeError> {
    let spec = serde_json::json!({
        "argv": params.command.argv,
        "final_text_parser": params.command.final_text_parser,
    });
    let (run, _pack) = run_entity::start_run(
        &params.root,
        params.project_id,
        params.agent_id,
        params.provider.clone(),
        spec,
        now_ms(),
    )?;
    Ok(run)
}

/// Spawn the provider process for an already-started `run` and drive it to
/// completion (or cancellation), finalizing the run record on exit.
pub async fn drive_session(
    params: SessionParams,
    run: Run,
    cancel: CancellationToken,
) -> Result<SessionOutcome, RuntimeError> {
    let SessionParams { root, project_id, provider, command, machine, .. } = params;

    let mut child_cmd = Command::new(&command.argv[0]);
    child_cmd
        .args(&command.argv[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = child_cmd
        .spawn()
        .map_err(|source| RuntimeError::Spawn { argv0: command.argv[0].clone(), source })?;
    tracing::info!(run_id = %run.id, provider = %provider, argv0 = %command.argv[0], "session spawned");

    if let Some(stdin_text) = &command.stdin_text {
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(stdin_text.as_bytes())
                .await
                .map_err(|source| RuntimeError::Stdin { session_id: run.id.to_string(), source })?;
        }
    }
    let stdin_chars = command.stdin_text.as_deref().map(str::len).unwrap_or(0);

    let stdout = match child.stdout.take() {
        Some(s) => s,
        None => unreachable!("stdout is always piped"),
    };
    let stderr = match child.stderr.take() {
        Some(s) => s,
        None => unreachable!("stderr is always piped"),
    };

    let mut usage = UsageExtractor::new();
    let mut cycles = CycleDetector::new();
    let mut stdout_stderr_chars = 0usize;
    let mut captured_stdout = String::new();
    let mut captured_stderr = String::new();

    let (exit_code, stopped) = drive_streams(
        &root, project_id, run.id, &mut child,
        stdout, stderr,
        &mut usage, &mut cycles,
        &mut stdout_stderr_chars, &mut captured_stdout, &mut captured_stderr,
        cancel,
    ).await?;

    let final_text_result = crate::finalize_text::compute_final_text(
        command.final_text_file_abs.as_deref(),
        command.final_text_parser.as_deref(),
        &captured_stdout,
    );

    let status = if stopped {
        RunStatus::Stopped
    } else if exit_code == Some(0) && final_text_result.is_ok() {
        RunStatus::Ended
    } else {
        RunStatus::Failed
    };
    let final_text = final_text_result.unwrap_or_default();

    let mut final_usage = usage.finalize(stdin_chars, stdout_stderr_chars);
    if let Some(card) = machine.rate_card_for(&provider) {
        apply_rate_card(&mut final_usage, &provider, card);
    }
    let final_cycles = cycles.finalize();

    let run = run_entity::finalize_run(
        &root,
        project_id,
        run.id,
        status,
        now_ms(),
        final_usage,
        final_cycles,
        exit_code,
    )?;
    tracing::info!(run_id = %run.id, status = %run.status, exit_code, "session finalized");

    Ok(SessionOutcome { run, final_text })
}

/// Stream both pipes to EOF while feeding the usage/cycle extractors,
/// honoring cancellation without ever dropping the stream futures.
///
/// Racing `cancel.cancelled()` against the read loop in a single top-level
/// `select!` (the prior shape) would drop whichever stream future lost the
/// race the instant cancellation won, discarding anything the child had
/// already written but not yet been read. Per spec §4.F ("pending streamed
/// lines are still processed"), cancellation must keep draining: once it
/// fires, this sends SIGTERM and arms a [`CANCEL_GRACE`] deadline as a third
/// branch in the *same* loop the stream reads run in, so already-buffered
/// and still-arriving output keeps being read and turned into `provider.raw`
/// events until the deadline, at which point SIGKILL is sent and draining
/// continues until both pipes close.
#[allow(clippy::too_many_arguments)]
async fn drive_streams(
    root: &std::path::Path,
    project_id: ProjectId,
    run_id: RunId,
    child: &mut Child,
    stdout: tokio::process::ChildStdout,
    stderr: tokio::process::ChildStderr,
    usage: &mut UsageExtractor,
    cycles: &mut CycleDetector,
    stdout_stderr_chars: &mut usize,
    captured_stdout: &mut String,
    captured_stderr: &mut String,
    cancel: CancellationToken,
) -> Result<(Option<i32>, bool), RuntimeError> {
    let mut stdout_lines = BufReader::new(stdout).lines();
    let mut stderr_lines = BufReader::new(stderr).lines();
    let mut stdout_done = false;
    let mut stderr_done = false;
    let mut stopped = false;
    let mut grace_deadline: Option<tokio::time::Instant> = None;
    let mut sigkill_sent = false;

    loop {
        if stdout_done && stderr_done {
            break;
        }
        tokio::select! {
            line = stdout_lines.next_line(), if !stdout_done => {
                match line.map_err(RuntimeError::Io)? {
                    Some(line) => {
                        *stdout_stderr_chars += line.len();
                        captured_stdout.push_str(&line);
                        captured_stdout.push('\n');
                        handle_line(root, project_id, run_id, &line, usage, cycles)?;
                    }
                    None => stdout_done = true,
                }
            }
            line = stderr_lines.next_line(), if !stderr_done => {
                match line.map_err(RuntimeError::Io)? {
                    Some(line) => {
                        *stdout_stderr_chars += line.len();
                        captured_stderr.push_str(&line);
                        captured_stderr.push('\n');
                        handle_line(root, project_id, run_id, &line, usage, cycles)?;
                    }
                    None => stderr_done = true,
                }
            }
            _ = cancel.cancelled(), if grace_deadline.is_none() => {
                stopped = true;
                if let Some(pid) = child.id() {
                    tracing::info!(pid, "sending SIGTERM to cancelled session");
                    send_signal(pid, libc_sigterm());
                }
                grace_deadline = Some(tokio::time::Instant::now() + CANCEL_GRACE);
            }
            _ = sleep_until_opt(grace_deadline), if grace_deadline.is_some() && !sigkill_sent => {
                tracing::warn!("session still alive after SIGTERM grace period, sending SIGKILL");
                let _ = child.start_kill();
                sigkill_sent = true;
            }
        }
    }

    let status = child.wait().await.map_err(RuntimeError::Io)?;
    Ok((status.code(), stopped))
}

/// `tokio::time::sleep_until` over an `Option` deadline, for use as a
/// `select!` branch gated by its own `if grace_deadline.is_some()` guard.
/// The guard ensures this is never polled with `None`, so the placeholder
/// deadline used there is never actually awaited against.
async fn sleep_until_opt(deadline: Option<tokio::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn handle_line(
    root: &std::path::Path,
    project_id: ProjectId,
    run_id: RunId,
    line: &str,
    usage: &mut UsageExtractor,
    cycles: &mut CycleDetector,
) -> Result<(), RuntimeError> {
    let parsed: Option<serde_json::Value> = serde_json::from_str(line).ok();
    usage.observe_line(parsed.as_ref());
    if let Some(value) = &parsed {
        cycles.observe_line(value);
        if let Some(method) = value.get("method").and_then(|m| m.as_str()) {
            cycles.observe_notification(method, value.get("params"));
        }
    }
    let raw = parsed.unwrap_or_else(|| serde_json::Value::String(line.to_string()));
    run_entity::append_provider_raw(root, project_id, run_id, raw, now_ms())?;
    Ok(())
}

/// Minimal `kill(2)` wrapper avoiding an extra dependency: shells out to the
/// `kill` binary rather than an `unsafe` FFI call, since `unsafe_code` is
/// forbidden workspace-wide.
fn send_signal(pid: u32, signal: &str) {
    let _ = std::process::Command::new("kill").arg(signal).arg(pid.to_string()).status();
}

fn libc_sigterm() -> &'static str {
    "-TERM"
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
