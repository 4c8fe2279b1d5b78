// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::layout::REQUIRED_FILES;
use tempfile::tempdir;

#[test]
fn init_creates_every_required_dir_and_file() {
    let dir = tempdir().unwrap();
    init(dir.path(), "Acme", false).unwrap();

    for required in REQUIRED_DIRS {
        assert!(dir.path().join(required).is_dir(), "missing dir {required}");
    }
    for required in REQUIRED_FILES {
        assert!(dir.path().join(required).is_file(), "missing file {required}");
    }
}

#[test]
fn init_on_nonempty_dir_without_force_fails() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("stray.txt"), b"hi").unwrap();

    let err = init(dir.path(), "Acme", false).unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists { .. }));
}

#[test]
fn init_on_nonempty_dir_with_force_succeeds() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("stray.txt"), b"hi").unwrap();

    init(dir.path(), "Acme", true).unwrap();
    assert!(company_yaml_path(dir.path()).is_file());
}

#[test]
fn init_writes_company_name() {
    let dir = tempdir().unwrap();
    let company = init(dir.path(), "Acme", false).unwrap();
    assert_eq!(company.name, "Acme");
}
