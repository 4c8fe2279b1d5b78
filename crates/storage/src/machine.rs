// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read/write `.local/machine.yaml` (spec §6).

use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::machine_yaml_path;
use ac_core::MachineConfig;
use std::path::Path;

pub fn read_machine_config(root: &Path) -> Result<MachineConfig, StorageError> {
    let path = machine_yaml_path(root);
    let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
    Ok(serde_yaml::from_str(&raw)?)
}

pub fn write_machine_config(root: &Path, config: &MachineConfig) -> Result<(), StorageError> {
    let yaml = serde_yaml::to_string(config)?;
    write_file_atomic(&machine_yaml_path(root), yaml.as_bytes())
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
