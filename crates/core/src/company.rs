// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single Company record that roots a workspace.

use crate::ids::CompanyId;
use serde::{Deserialize, Serialize};

/// `company/company.yaml`. Exactly one per workspace. Immutable after
/// `init` except for `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Company {
    pub schema_version: u32,
    pub id: CompanyId,
    pub name: String,
    pub created_at_ms: u64,
}

impl Company {
    pub const CURRENT_SCHEMA_VERSION: u32 = 1;

    pub fn new(name: impl Into<String>, created_at_ms: u64) -> Self {
        Self {
            schema_version: Self::CURRENT_SCHEMA_VERSION,
            id: CompanyId::new(),
            name: name.into(),
            created_at_ms,
        }
    }
}

#[cfg(test)]
#[path = "company_tests.rs"]
mod tests;
