// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `work/projects/<project_id>/tasks/<task_id>.md` CRUD: YAML front matter
//! plus a free-form markdown body.

use crate::atomic::write_file_atomic;
use crate::error::StorageError;
use crate::layout::task_path;
use crate::lock::workspace_write_lock;
use ac_core::{parse_front_matter, render_front_matter, ProjectId, Task, TaskId, TaskStatus, Visibility};
use std::path::Path;

/// Create a task with an empty body and write it under the workspace lock.
pub fn create_task(
    root: &Path,
    project_id: ProjectId,
    title: impl Into<String>,
    visibility: Visibility,
    created_at_ms: u64,
) -> Result<Task, StorageError> {
    let _lock = workspace_write_lock(root)?;
    let task = Task::new(project_id, title, visibility, created_at_ms);
    write_task(root, &task, "")?;
    Ok(task)
}

pub fn read_task(root: &Path, project_id: ProjectId, id: TaskId) -> Result<(Task, String), StorageError> {
    let path = task_path(root, project_id, id);
    let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
    let (task, body) = parse_front_matter::<Task>(&raw)?;
    Ok((task, body))
}

/// Rewrite a task's status, preserving its body.
pub fn set_task_status(
    root: &Path,
    project_id: ProjectId,
    id: TaskId,
    status: TaskStatus,
) -> Result<Task, StorageError> {
    let _lock = workspace_write_lock(root)?;
    let (mut task, body) = read_task(root, project_id, id)?;
    task.status = status;
    write_task(root, &task, &body)?;
    Ok(task)
}

/// Overwrite a task's markdown body, preserving its front matter.
pub fn set_task_body(root: &Path, project_id: ProjectId, id: TaskId, body: &str) -> Result<(), StorageError> {
    let _lock = workspace_write_lock(root)?;
    let (task, _) = read_task(root, project_id, id)?;
    write_task(root, &task, body)
}

fn write_task(root: &Path, task: &Task, body: &str) -> Result<(), StorageError> {
    let rendered = render_front_matter(task, body)?;
    write_file_atomic(&task_path(root, task.project_id, task.id), rendered.as_bytes())
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
