// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Teams group agents under a shared charter.

use crate::ids::TeamId;
use serde::{Deserialize, Serialize};

/// `org/teams/<team_id>/team.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Team {
    pub schema_version: u32,
    pub id: TeamId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charter: Option<String>,
    pub created_at_ms: u64,
}

impl Team {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(name: impl Into<String>, created_at_ms: u64) -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            id: TeamId::new(),
            name: name.into(),
            department_key: None,
            charter: None,
            created_at_ms,
        }
    }

    crate::setters! {
        option {
            department_key: String,
            charter: String,
        }
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod tests;
