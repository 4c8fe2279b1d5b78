// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session registry and lifecycle (spec §4.L): a process-wide map of
//! running sessions. Per spec §5, the registry is mutated only on its own
//! runtime task; concurrent callers post commands through a channel rather
//! than touching the map directly.

use crate::error::RuntimeError;
use crate::session::{begin_run, drive_session, SessionOutcome, SessionParams};
use ac_core::RunId;
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

/// A session's state as seen from outside the runtime task.
#[derive(Debug, Clone)]
pub enum SessionStatus {
    Running,
    Finished(SessionOutcomeSummary),
    Failed(String),
}

/// What a finished session's status carries: enough to answer `list`/`poll`
/// without cloning the full [`ac_core::Run`] record repeatedly.
#[derive(Debug, Clone)]
pub struct SessionOutcomeSummary {
    pub run_id: RunId,
    pub status: ac_core::RunStatus,
}

impl From<&SessionOutcome> for SessionOutcomeSummary {
    fn from(outcome: &SessionOutcome) -> Self {
        Self { run_id: outcome.run.id, status: outcome.run.status }
    }
}

struct Entry {
    cancel: CancellationToken,
    status: SessionStatus,
    /// Set once the session finishes, taken by the first `collect`.
    outcome: Option<Result<SessionOutcome, RuntimeError>>,
    /// A caller already waiting in `collect` before the session finished.
    waiting_collect: Option<oneshot::Sender<Result<SessionOutcome, RuntimeError>>>,
}

enum Command {
    Spawn { params: Box<SessionParams>, reply: oneshot::Sender<Result<RunId, RuntimeError>> },
    Poll { run_id: RunId, reply: oneshot::Sender<Option<SessionStatus>> },
    Collect { run_id: RunId, reply: oneshot::Sender<Result<SessionOutcome, RuntimeError>> },
    Stop { run_id: RunId, reply: oneshot::Sender<Result<(), RuntimeError>> },
    List { reply: oneshot::Sender<Vec<(RunId, SessionStatus)>> },
    /// Self-posted by the task driving a session once it reaches a
    /// terminal state (or fails to spawn), re-entering the same command
    /// queue every other mutation goes through.
    Finished { run_id: RunId, result: Result<SessionOutcome, RuntimeError> },
}

/// Handle callers use to drive the registry. Cloning is cheap; every clone
/// shares the same underlying runtime task.
#[derive(Clone)]
pub struct SessionRegistry {
    tx: mpsc::UnboundedSender<Command>,
}

impl SessionRegistry {
    /// Start the registry's runtime task and return a handle to it.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_registry_task(rx, tx.clone()));
        Self { tx }
    }

    fn gone(context: impl std::fmt::Display) -> RuntimeError {
        RuntimeError::SessionNotFound(format!("registry task gone ({context})"))
    }

    /// Start a run record and spawn its subprocess in the background,
    /// returning the new `run_id` once the run has been durably started.
    pub async fn launch(&self, params: SessionParams) -> Result<RunId, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Command::Spawn { params: Box::new(params), reply }).map_err(Self::gone)?;
        rx.await.map_err(Self::gone)?
    }

    pub async fn poll(&self, run_id: RunId) -> Result<SessionStatus, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Command::Poll { run_id, reply }).map_err(Self::gone)?;
        rx.await.map_err(Self::gone)?.ok_or_else(|| RuntimeError::SessionNotFound(run_id.to_string()))
    }

    /// Await a session's terminal outcome, removing it from the registry.
    pub async fn collect(&self, run_id: RunId) -> Result<SessionOutcome, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Command::Collect { run_id, reply }).map_err(Self::gone)?;
        rx.await.map_err(Self::gone)?
    }

    /// Cooperatively cancel a running session (SIGTERM then SIGKILL, spec
    /// §4.F). A no-op once the session has already reached a terminal state.
    pub async fn stop(&self, run_id: RunId) -> Result<(), RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Command::Stop { run_id, reply }).map_err(Self::gone)?;
        rx.await.map_err(Self::gone)?
    }

    pub async fn list(&self) -> Vec<(RunId, SessionStatus)> {
        let (reply, rx) = oneshot::channel();
        if self.tx.send(Command::List { reply }).is_err() {
            return Vec::new();
        }
        rx.await.unwrap_or_default()
    }
}

async fn run_registry_task(mut rx: mpsc::UnboundedReceiver<Command>, self_tx: mpsc::UnboundedSender<Command>) {
    let mut sessions: HashMap<RunId, Entry> = HashMap::new();

    while let Some(cmd) = rx.recv().await {
        handle_command(&mut sessions, cmd, &self_tx);
    }
}

fn handle_command(sessions: &mut HashMap<RunId, Entry>, cmd: Command, self_tx: &mpsc::UnboundedSender<Command>) {
    match cmd {
        Command::Spawn { params, reply } => {
            let run = match begin_run(&params) {
                Ok(run) => run,
                Err(e) => {
                    let _ = reply.send(Err(e));
                    return;
                }
            };
            let run_id = run.id;
            let cancel = CancellationToken::new();
            sessions.insert(
                run_id,
                Entry { cancel: cancel.clone(), status: SessionStatus::Running, outcome: None, waiting_collect: None },
            );

            let finished_tx = self_tx.clone();
            tokio::spawn(async move {
                let result = drive_session(*params, run, cancel).await;
                let _ = finished_tx.send(Command::Finished { run_id, result });
            });

            let _ = reply.send(Ok(run_id));
        }
        Command::Poll { run_id, reply } => {
            let _ = reply.send(sessions.get(&run_id).map(|e| e.status.clone()));
        }
        Command::Collect { run_id, reply } => match sessions.get_mut(&run_id) {
            Some(entry) => {
                if let Some(outcome) = entry.outcome.take() {
                    sessions.remove(&run_id);
                    let _ = reply.send(outcome);
                } else {
                    entry.waiting_collect = Some(reply);
                }
            }
            None => {
                let _ = reply.send(Err(RuntimeError::SessionNotFound(run_id.to_string())));
            }
        },
        Command::Stop { run_id, reply } => match sessions.get(&run_id) {
            Some(entry) => {
                entry.cancel.cancel();
                let _ = reply.send(Ok(()));
            }
            None => {
                let _ = reply.send(Err(RuntimeError::SessionNotFound(run_id.to_string())));
            }
        },
        Command::List { reply } => {
            let list = sessions.iter().map(|(id, e)| (*id, e.status.clone())).collect();
            let _ = reply.send(list);
        }
        Command::Finished { run_id, result } => {
            if let Some(entry) = sessions.get_mut(&run_id) {
                entry.status = match &result {
                    Ok(outcome) => SessionStatus::Finished(SessionOutcomeSummary::from(outcome)),
                    Err(e) => SessionStatus::Failed(e.to_string()),
                };
                if let Some(waiting) = entry.waiting_collect.take() {
                    sessions.remove(&run_id);
                    let _ = waiting.send(result);
                } else {
                    entry.outcome = Some(result);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
