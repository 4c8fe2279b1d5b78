// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace `init` (spec §4.I): create the required skeleton with defaults.

use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::{company_yaml_path, machine_yaml_path, policy_yaml_path, REQUIRED_DIRS};
use ac_core::{Clock, Company, MachineConfig, SystemClock};
use std::path::Path;

/// The `company/policy.yaml` placeholder. Policy rules themselves are fixed
/// in `ac-policy` rather than data-driven, so this file only records that
/// the workspace uses that built-in rule set.
const DEFAULT_POLICY_YAML: &str = "schema_version: 1\nrule_set: built_in\n";

/// Create `root`'s required directory tree and default files. Fails if
/// `root` already exists and is non-empty, unless `force` is set.
pub fn init(root: &Path, company_name: &str, force: bool) -> Result<Company, StorageError> {
    if !force && dir_is_nonempty(root) {
        return Err(StorageError::AlreadyExists { path: root.to_owned() });
    }

    for dir in REQUIRED_DIRS {
        std::fs::create_dir_all(root.join(dir)).map_err(|e| StorageError::io(root.join(dir), e))?;
    }

    let company = Company::new(company_name, SystemClock.epoch_ms());
    write_file_atomic(&company_yaml_path(root), serde_yaml::to_string(&company)?.as_bytes())?;
    write_file_atomic(&policy_yaml_path(root), DEFAULT_POLICY_YAML.as_bytes())?;
    write_file_atomic(&machine_yaml_path(root), serde_yaml::to_string(&MachineConfig::new())?.as_bytes())?;

    Ok(company)
}

fn dir_is_nonempty(root: &Path) -> bool {
    std::fs::read_dir(root).map(|mut entries| entries.next().is_some()).unwrap_or(false)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
