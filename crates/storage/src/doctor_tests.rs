// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::init::init;
use tempfile::tempdir;

#[test]
fn empty_directory_fails_required_files_check() {
    let dir = tempdir().unwrap();
    let report = doctor(dir.path());
    assert!(!report.ok());
    let check = report.checks.iter().find(|c| c.name == "required_files").unwrap();
    assert!(!check.ok);
}

#[test]
fn freshly_initialized_workspace_passes_every_check() {
    let dir = tempdir().unwrap();
    init(dir.path(), "Acme", false).unwrap();

    let report = doctor(dir.path());
    assert!(report.ok(), "{:?}", report.checks);
}

#[test]
fn unresolvable_provider_binary_fails_that_check_only() {
    let dir = tempdir().unwrap();
    init(dir.path(), "Acme", false).unwrap();

    let mut config = read_machine_config(dir.path()).unwrap();
    config.provider_bins.insert("ghost".to_string(), "/nonexistent/ghost-cli".into());
    crate::machine::write_machine_config(dir.path(), &config).unwrap();

    let report = doctor(dir.path());
    let check = report.checks.iter().find(|c| c.name == "provider_binaries").unwrap();
    assert!(!check.ok);
    let required_files = report.checks.iter().find(|c| c.name == "required_files").unwrap();
    assert!(required_files.ok);
}
