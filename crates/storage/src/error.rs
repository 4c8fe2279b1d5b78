// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The error taxonomy for every write path this crate exposes.

use ac_core::SchemaError;
use ac_eventlog::EventLogError;
use ac_index::IndexError;
use ac_policy::PolicyDenied;
use std::path::PathBuf;
use thiserror::Error;

use crate::redaction::SensitiveTextError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error at {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("workspace write lock at {path} is held by another process")]
    LockContended { path: PathBuf },

    #[error("run {run_id} has already reached terminal status {status}")]
    RunTerminal { run_id: String, status: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    EventLog(#[from] EventLogError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    PolicyDenied(#[from] PolicyDenied),

    #[error(transparent)]
    SensitiveText(#[from] SensitiveTextError),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
