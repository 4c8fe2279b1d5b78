// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic file writes: write-temp-then-rename-then-fsync(parent), so a crash
//! mid-write leaves either the prior content or the full new content visible,
//! never a partial file.

use crate::error::StorageError;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write `bytes` to `path` atomically, creating parent directories as needed.
pub fn write_file_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let parent = path.parent().ok_or_else(|| StorageError::io(path, std::io::Error::other("path has no parent")))?;
    fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;

    let tmp_path = parent.join(format!(".{}.tmp-{}", file_name_or(path), std::process::id()));

    {
        let mut file = File::create(&tmp_path).map_err(|e| StorageError::io(&tmp_path, e))?;
        file.write_all(bytes).map_err(|e| StorageError::io(&tmp_path, e))?;
        file.sync_all().map_err(|e| StorageError::io(&tmp_path, e))?;
    }

    fs::rename(&tmp_path, path).map_err(|e| StorageError::io(path, e))?;

    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

fn file_name_or(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_else(|| "file".to_string())
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
