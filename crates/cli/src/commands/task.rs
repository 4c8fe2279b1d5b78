// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ac task` — task CRUD.

use crate::output::{format_or_json, OutputFormat};
use ac_core::{TaskStatus, Visibility};
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommand,
}

#[derive(Subcommand)]
pub enum TaskCommand {
    /// Create a task under a project.
    Create {
        #[arg(long)]
        project: String,
        title: String,
        #[arg(long, value_enum, default_value = "team")]
        visibility: VisibilityArg,
    },
    /// Show a task's front matter and body.
    Show {
        #[arg(long)]
        project: String,
        id: String,
    },
    /// Move a task to a new status.
    SetStatus {
        #[arg(long)]
        project: String,
        id: String,
        #[arg(value_enum)]
        status: TaskStatusArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum VisibilityArg {
    PrivateAgent,
    Team,
    Managers,
    Org,
}

impl From<VisibilityArg> for Visibility {
    fn from(v: VisibilityArg) -> Self {
        match v {
            VisibilityArg::PrivateAgent => Visibility::PrivateAgent,
            VisibilityArg::Team => Visibility::Team,
            VisibilityArg::Managers => Visibility::Managers,
            VisibilityArg::Org => Visibility::Org,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum TaskStatusArg {
    Draft,
    Ready,
    InProgress,
    Blocked,
    Done,
    Canceled,
}

impl From<TaskStatusArg> for TaskStatus {
    fn from(s: TaskStatusArg) -> Self {
        match s {
            TaskStatusArg::Draft => TaskStatus::Draft,
            TaskStatusArg::Ready => TaskStatus::Ready,
            TaskStatusArg::InProgress => TaskStatus::InProgress,
            TaskStatusArg::Blocked => TaskStatus::Blocked,
            TaskStatusArg::Done => TaskStatus::Done,
            TaskStatusArg::Canceled => TaskStatus::Canceled,
        }
    }
}

pub fn run(root: &Path, args: TaskArgs, output: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        TaskCommand::Create { project, title, visibility } => {
            let project_id = ac_core::ProjectId::from_string(project);
            let task = ac_storage::entities::task::create_task(root, project_id, &title, visibility.into(), super::now_ms())?;
            format_or_json(output, &task, || println!("Created task '{}' ({})", task.title, task.id))
        }
        TaskCommand::Show { project, id } => {
            let project_id = ac_core::ProjectId::from_string(project);
            let task_id = ac_core::TaskId::from_string(id);
            let (task, body) = ac_storage::entities::task::read_task(root, project_id, task_id)?;
            format_or_json(output, &task, || {
                println!("{} ({}, {})", task.title, task.id, task.status);
                if !body.is_empty() {
                    println!("\n{body}");
                }
            })
        }
        TaskCommand::SetStatus { project, id, status } => {
            let project_id = ac_core::ProjectId::from_string(project);
            let task_id = ac_core::TaskId::from_string(id);
            let task = ac_storage::entities::task::set_task_status(root, project_id, task_id, status.into())?;
            format_or_json(output, &task, || println!("Task '{}' is now {}", task.title, task.status))
        }
    }
}
