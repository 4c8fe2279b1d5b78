// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single-threaded, debounced/throttled sync worker (spec §4.H).
//!
//! A background task owns the pending set of workspace paths and the
//! schedule; callers only ever post commands through a channel, matching
//! this workspace's "coroutine control flow... never free-floating
//! callbacks" convention (SPEC_FULL §1).

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::warn;

use crate::db::Index;
use crate::error::IndexError;
use crate::sync::sync_workspace;

#[derive(Debug, Clone, Copy)]
pub struct WorkerConfig {
    pub debounce_ms: u64,
    pub min_interval_ms: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self { debounce_ms: 250, min_interval_ms: 1000 }
    }
}

/// Cumulative counters exposed by [`IndexSyncWorker::status`].
#[derive(Debug, Clone, Default)]
pub struct SyncStatus {
    pub notify_count: u64,
    pub batch_count: u64,
    pub sync_attempts: u64,
    pub sync_errors: u64,
    pub last_error: Option<String>,
    pub pending: usize,
}

#[derive(Default)]
struct Counters {
    notify_count: AtomicU64,
    batch_count: AtomicU64,
    sync_attempts: AtomicU64,
    sync_errors: AtomicU64,
    last_error: parking_lot::Mutex<Option<String>>,
}

enum Command {
    Notify(PathBuf),
    Flush(oneshot::Sender<()>),
    Close(oneshot::Sender<()>),
    Status(oneshot::Sender<usize>),
}

/// The callback invoked once per pending workspace path in a batch. Opening
/// a fresh [`Index`] handle per call keeps the worker decoupled from any
/// particular connection's lifetime.
pub type SyncFn = Arc<dyn Fn(&Path) -> Result<(), IndexError> + Send + Sync>;

fn default_sync_fn() -> SyncFn {
    Arc::new(|workspace_root: &Path| {
        let index = Index::open_for_workspace(workspace_root)?;
        sync_workspace(&index, workspace_root)
    })
}

/// A running sync worker. Dropping this handle without calling [`close`]
/// leaves the background task running with commands simply undeliverable;
/// prefer an explicit `close().await` at shutdown.
///
/// [`close`]: IndexSyncWorker::close
pub struct IndexSyncWorker {
    cmd_tx: mpsc::UnboundedSender<Command>,
    counters: Arc<Counters>,
    task: Option<JoinHandle<()>>,
}

impl IndexSyncWorker {
    pub fn spawn(config: WorkerConfig) -> Self {
        Self::spawn_with(config, default_sync_fn())
    }

    pub fn spawn_with(config: WorkerConfig, sync_fn: SyncFn) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let counters = Arc::new(Counters::default());
        let task = tokio::spawn(run(cmd_rx, config, sync_fn, counters.clone()));
        Self { cmd_tx, counters, task: Some(task) }
    }

    /// Mark `workspace_dir` as having unsynced changes. Schedules (or
    /// reschedules earlier) a batch at
    /// `max(now + debounce_ms, last_run + min_interval_ms)`.
    pub fn notify(&self, workspace_dir: impl Into<PathBuf>) {
        let _ = self.cmd_tx.send(Command::Notify(workspace_dir.into()));
    }

    /// Wait until every currently-pending workspace (including any that
    /// arrive while a batch is running) has been synced at least once.
    pub async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        if self.cmd_tx.send(Command::Flush(tx)).is_ok() {
            let _ = rx.await;
        }
    }

    /// Flush, then refuse any further notifications and stop the worker task.
    pub async fn close(mut self) {
        let (tx, rx) = oneshot::channel();
        if self.cmd_tx.send(Command::Close(tx)).is_ok() {
            let _ = rx.await;
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub async fn status(&self) -> SyncStatus {
        let (tx, rx) = oneshot::channel();
        let pending = if self.cmd_tx.send(Command::Status(tx)).is_ok() {
            rx.await.unwrap_or(0)
        } else {
            0
        };
        SyncStatus {
            notify_count: self.counters.notify_count.load(Ordering::Relaxed),
            batch_count: self.counters.batch_count.load(Ordering::Relaxed),
            sync_attempts: self.counters.sync_attempts.load(Ordering::Relaxed),
            sync_errors: self.counters.sync_errors.load(Ordering::Relaxed),
            last_error: self.counters.last_error.lock().clone(),
            pending,
        }
    }
}

async fn run(
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    config: WorkerConfig,
    sync_fn: SyncFn,
    counters: Arc<Counters>,
) {
    let mut pending: BTreeSet<PathBuf> = BTreeSet::new();
    let mut last_run: Option<Instant> = None;
    let mut deadline: Option<Instant> = None;
    let mut flush_waiters: Vec<oneshot::Sender<()>> = Vec::new();
    let mut closed = false;

    loop {
        let sleep_fut = async {
            match deadline {
                Some(d) => tokio::time::sleep_until(d).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    None => break,
                    Some(Command::Notify(path)) => {
                        if closed {
                            continue;
                        }
                        counters.notify_count.fetch_add(1, Ordering::Relaxed);
                        pending.insert(path);
                        let now = Instant::now();
                        let earliest = now + Duration::from_millis(config.debounce_ms);
                        let not_before = last_run
                            .map(|lr| lr + Duration::from_millis(config.min_interval_ms))
                            .unwrap_or(now);
                        let candidate = earliest.max(not_before);
                        deadline = Some(deadline.map_or(candidate, |d| d.min(candidate)));
                    }
                    Some(Command::Flush(done)) => {
                        if pending.is_empty() {
                            let _ = done.send(());
                        } else {
                            flush_waiters.push(done);
                            if deadline.is_none() {
                                deadline = Some(Instant::now());
                            }
                        }
                    }
                    Some(Command::Close(done)) => {
                        closed = true;
                        if pending.is_empty() {
                            let _ = done.send(());
                            break;
                        }
                        flush_waiters.push(done);
                        if deadline.is_none() {
                            deadline = Some(Instant::now());
                        }
                    }
                    Some(Command::Status(respond)) => {
                        let _ = respond.send(pending.len());
                    }
                }
            }
            () = sleep_fut, if deadline.is_some() => {
                deadline = None;
                let batch: Vec<PathBuf> = std::mem::take(&mut pending).into_iter().collect();
                if !batch.is_empty() {
                    run_batch(&batch, &sync_fn, &counters).await;
                    counters.batch_count.fetch_add(1, Ordering::Relaxed);
                }
                last_run = Some(Instant::now());

                if pending.is_empty() {
                    for waiter in flush_waiters.drain(..) {
                        let _ = waiter.send(());
                    }
                    if closed {
                        break;
                    }
                } else {
                    // More notifications arrived mid-batch; schedule another round.
                    deadline = Some(Instant::now() + Duration::from_millis(config.debounce_ms));
                }
            }
        }
    }
}

async fn run_batch(batch: &[PathBuf], sync_fn: &SyncFn, counters: &Arc<Counters>) {
    for path in batch {
        counters.sync_attempts.fetch_add(1, Ordering::Relaxed);
        let path = path.clone();
        let sync_fn = sync_fn.clone();
        let result = tokio::task::spawn_blocking(move || sync_fn(&path)).await;
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                counters.sync_errors.fetch_add(1, Ordering::Relaxed);
                *counters.last_error.lock() = Some(e.to_string());
                warn!(error = %e, "index sync batch entry failed");
            }
            Err(join_err) => {
                counters.sync_errors.fetch_add(1, Ordering::Relaxed);
                *counters.last_error.lock() = Some(join_err.to_string());
                warn!(error = %join_err, "index sync task panicked");
            }
        }
    }
}
