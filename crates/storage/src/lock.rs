// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single-writer workspace advisory lock (spec §4.A).
//!
//! Every write under the workspace tree except lock metadata itself and the
//! SQLite index goes through [`workspace_write_lock`]. Held for the
//! lifetime of the returned guard; dropping it releases the `fs2` advisory
//! lock and leaves the metadata file in place (its content is only read at
//! acquisition time, never at release).

use crate::error::StorageError;
use crate::layout::workspace_lock_path;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Lock metadata persisted alongside the advisory lock so a stale holder can
/// be diagnosed and reclaimed.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LockMetadata {
    pid: u32,
    acquired_at_ms: u64,
}

/// Once a held lock's metadata file is older than this and its pid is no
/// longer alive, a new acquirer may reclaim it.
const STALE_AGE: Duration = Duration::from_secs(60);

/// Total time [`workspace_write_lock`] will retry before giving up.
const MAX_RETRY_BUDGET: Duration = Duration::from_secs(30);

const INITIAL_BACKOFF: Duration = Duration::from_millis(50);
const MAX_BACKOFF: Duration = Duration::from_secs(2);

/// An acquired workspace write lock. Releases on drop.
pub struct WorkspaceLock {
    path: PathBuf,
    file: File,
}

impl WorkspaceLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkspaceLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

fn now_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}

#[cfg(target_os = "linux")]
fn pid_is_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{pid}")).exists()
}

#[cfg(not(target_os = "linux"))]
fn pid_is_alive(_pid: u32) -> bool {
    // Conservative: assume alive so we never reclaim a lock we can't verify.
    true
}

fn is_stale(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else { return false };
    let Ok(age) = metadata.modified().and_then(|m| m.elapsed()) else { return false };
    if age < STALE_AGE {
        return false;
    }
    let Ok(raw) = std::fs::read_to_string(path) else { return true };
    let Ok(recorded) = serde_yaml::from_str::<LockMetadata>(&raw) else { return true };
    !pid_is_alive(recorded.pid)
}

fn try_acquire(path: &Path) -> Result<Option<WorkspaceLock>, StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| StorageError::io(path, e))?;

    match file.try_lock_exclusive() {
        Ok(()) => {
            let metadata = LockMetadata { pid: std::process::id(), acquired_at_ms: now_ms() };
            let yaml = serde_yaml::to_string(&metadata)?;
            let mut file = file;
            file.set_len(0).map_err(|e| StorageError::io(path, e))?;
            use std::io::Seek;
            file.seek(std::io::SeekFrom::Start(0)).map_err(|e| StorageError::io(path, e))?;
            file.write_all(yaml.as_bytes()).map_err(|e| StorageError::io(path, e))?;
            file.sync_all().map_err(|e| StorageError::io(path, e))?;
            Ok(Some(WorkspaceLock { path: path.to_owned(), file }))
        }
        Err(_) if is_stale(path) => {
            // Another holder's process is gone and its metadata is old
            // enough to trust; the file itself can't be force-unlocked out
            // from under the OS, so surface contention and let the caller's
            // retry loop try again after whatever cleaned it up (or after
            // this process exits and the advisory lock is released by the
            // kernel).
            Ok(None)
        }
        Err(_) => Ok(None),
    }
}

/// Acquire the workspace write lock at `.local/locks/workspace.write.lock`,
/// retrying with exponential backoff and jitter up to a 30s total budget.
pub fn workspace_write_lock(root: &Path) -> Result<WorkspaceLock, StorageError> {
    let path = workspace_lock_path(root);
    let deadline = std::time::Instant::now() + MAX_RETRY_BUDGET;
    let mut backoff = INITIAL_BACKOFF;

    loop {
        if let Some(lock) = try_acquire(&path)? {
            return Ok(lock);
        }
        if std::time::Instant::now() >= deadline {
            return Err(StorageError::LockContended { path });
        }
        let jitter_ms = (now_ms() % 37) as u64;
        thread::sleep(backoff.min(MAX_BACKOFF) + Duration::from_millis(jitter_ms));
        backoff = (backoff * 2).min(MAX_BACKOFF);
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
