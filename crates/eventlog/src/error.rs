// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

/// Failure modes for opening or appending to an event log file.
#[derive(Debug, Error)]
pub enum EventLogError {
    #[error("io error on {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },
    #[error("failed to acquire write lock on {path}: {source}")]
    Locked { path: PathBuf, #[source] source: std::io::Error },
    #[error("failed to serialize event envelope: {0}")]
    Serialize(#[from] serde_json::Error),
}
