// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn acquire_then_release_allows_reacquire() {
    let dir = tempdir().unwrap();
    let lock = workspace_write_lock(dir.path()).unwrap();
    drop(lock);
    let _lock2 = workspace_write_lock(dir.path()).unwrap();
}

#[test]
fn second_holder_sees_contention_while_first_is_live() {
    let dir = tempdir().unwrap();
    let _lock = workspace_write_lock(dir.path()).unwrap();

    let path = workspace_lock_path(dir.path());
    let result = try_acquire(&path);
    assert!(matches!(result, Ok(None)));
}

#[test]
fn lock_metadata_records_this_process_pid() {
    let dir = tempdir().unwrap();
    let lock = workspace_write_lock(dir.path()).unwrap();
    let raw = std::fs::read_to_string(lock.path()).unwrap();
    let metadata: LockMetadata = serde_yaml::from_str(&raw).unwrap();
    assert_eq!(metadata.pid, std::process::id());
}

#[test]
fn stale_lock_older_than_threshold_with_dead_pid_is_reclaimable() {
    let dir = tempdir().unwrap();
    let path = workspace_lock_path(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let metadata = LockMetadata { pid: u32::MAX, acquired_at_ms: 0 };
    std::fs::write(&path, serde_yaml::to_string(&metadata).unwrap()).unwrap();

    let old = std::time::SystemTime::now() - Duration::from_secs(120);
    let file = std::fs::OpenOptions::new().write(true).open(&path).unwrap();
    file.set_times(std::fs::FileTimes::new().set_modified(old)).unwrap();

    assert!(is_stale(&path));
}
