// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental resync: re-reads the truth tree only when at least one
//! tracked source file's `(mtime, size)` has changed since the last sync,
//! then performs a full [`crate::rebuild::rebuild`] — which is itself
//! idempotent and cheap (a handful of `DELETE`+`INSERT` statements in one
//! transaction), so there is no correctness gap from not diffing row by row.

use rusqlite::params;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::db::Index;
use crate::error::IndexError;
use crate::rebuild::rebuild;

fn source_files(workspace_root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let projects_dir = workspace_root.join("work").join("projects");
    let Ok(projects) = std::fs::read_dir(&projects_dir) else { return files };
    for project in projects.filter_map(|e| e.ok()) {
        let project_dir = project.path();
        if !project_dir.is_dir() {
            continue;
        }
        if let Ok(runs) = std::fs::read_dir(project_dir.join("runs")) {
            for run in runs.filter_map(|e| e.ok()) {
                files.push(run.path().join("run.yaml"));
                files.push(run.path().join("events.jsonl"));
            }
        }
        if let Ok(artifacts) = std::fs::read_dir(project_dir.join("artifacts")) {
            for artifact in artifacts.filter_map(|e| e.ok()) {
                if artifact.path().extension().and_then(|e| e.to_str()) == Some("md") {
                    files.push(artifact.path());
                }
            }
        }
    }
    if let Ok(reviews) = std::fs::read_dir(workspace_root.join("inbox").join("reviews")) {
        for review in reviews.filter_map(|e| e.ok()) {
            files.push(review.path());
        }
    }
    files
}

fn stat(path: &Path) -> Option<(i64, i64)> {
    let meta = std::fs::metadata(path).ok()?;
    let mtime_ms = meta.modified().ok()?.duration_since(UNIX_EPOCH).ok()?.as_millis() as i64;
    Some((mtime_ms, meta.len() as i64))
}

/// Sync `index` against `workspace_root`'s current truth tree. Transparently
/// performs a full rebuild the first time (when `sources` is empty) or
/// whenever a tracked file's `(mtime, size)` tuple has drifted.
pub fn sync_workspace(index: &Index, workspace_root: &Path) -> Result<(), IndexError> {
    let files = source_files(workspace_root);

    let changed = index.with_conn(|conn| {
        for path in &files {
            let key = path.to_string_lossy().to_string();
            let Some((mtime_ms, size)) = stat(path) else { continue };
            let prev: Option<(i64, i64)> = conn
                .query_row("SELECT mtime_ms, size FROM sources WHERE path = ?1", params![key], |r| {
                    Ok((r.get(0)?, r.get(1)?))
                })
                .ok();
            if prev != Some((mtime_ms, size)) {
                return Ok::<bool, IndexError>(true);
            }
        }
        Ok(files.is_empty() && !has_any_source(conn)?)
    })?;

    if !changed {
        return Ok(());
    }

    rebuild(index, workspace_root)?;

    index.with_conn_mut(|conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM sources", [])?;
        for path in &files {
            if let Some((mtime_ms, size)) = stat(path) {
                tx.execute(
                    "INSERT INTO sources (path, mtime_ms, size) VALUES (?1, ?2, ?3)",
                    params![path.to_string_lossy().to_string(), mtime_ms, size],
                )?;
            }
        }
        tx.commit()?;
        Ok(())
    })
}

fn has_any_source(conn: &rusqlite::Connection) -> Result<bool, IndexError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM sources", [], |r| r.get(0))?;
    Ok(count > 0)
}
