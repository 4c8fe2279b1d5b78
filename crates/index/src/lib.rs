// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ac-index: the derived SQLite projection over an AgentCompany workspace,
//! and the debounced/throttled worker that keeps it resynced.
//!
//! This crate never mutates truth files. [`rebuild::rebuild`] and
//! [`sync::sync_workspace`] only read `run.yaml`, `events.jsonl`,
//! `artifacts/*.md`, and `inbox/reviews/*.yaml`.

pub mod db;
pub mod error;
pub mod queries;
pub mod rebuild;
pub mod schema;
pub mod sync;
pub mod worker;

pub use db::Index;
pub use error::IndexError;
pub use queries::{PendingReview, ReviewDecisionRow, RunRow, RunUsageRow};
pub use rebuild::rebuild;
pub use sync::sync_workspace;
pub use worker::{IndexSyncWorker, SyncStatus, WorkerConfig};

use std::path::Path;

/// Open the index for `workspace_root`, syncing it transparently if it was
/// just created or is stale. Most read call sites should go through this
/// rather than opening + syncing by hand.
pub fn ensure_synced(workspace_root: &Path) -> Result<Index, IndexError> {
    let index = Index::open_for_workspace(workspace_root)?;
    sync::sync_workspace(&index, workspace_root)?;
    Ok(index)
}
