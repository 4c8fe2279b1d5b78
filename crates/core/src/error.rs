// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared parse/validation error types for entity schemas.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to parse a persisted entity against its schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown field {field:?} in {entity} (schemas reject unrecognized top-level fields)")]
    UnknownField { entity: &'static str, field: String },

    #[error("{entity} schema_version {found} is newer than the highest version this build understands ({max})")]
    VersionTooNew { entity: &'static str, found: u32, max: u32 },

    #[error("invalid value {value:?} for enumerated field {field:?} in {entity}")]
    InvalidEnumValue { entity: &'static str, field: &'static str, value: String },

    #[error("required front-matter heading {heading:?} missing from {entity} body")]
    MissingHeading { entity: &'static str, heading: &'static str },

    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One problem found while validating a workspace tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: PathBuf,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Result of `validate()`: every issue found across the tree, not just the
/// first. Per the resolved open question, validation never fails fast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.issues.push(Issue::new(path, message));
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
