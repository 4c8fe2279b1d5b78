// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The error taxonomy for subprocess sessions and the session registry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to spawn {argv0}: {source}")]
    Spawn { argv0: String, #[source] source: std::io::Error },

    #[error("failed to write stdin for session {session_id}: {source}")]
    Stdin { session_id: String, #[source] source: std::io::Error },

    #[error("session {0} not found in the registry")]
    SessionNotFound(String),

    #[error(transparent)]
    Storage(#[from] ac_storage::StorageError),

    #[error("final text file {path} could not be read: {source}")]
    FinalTextFile { path: std::path::PathBuf, #[source] source: std::io::Error },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
