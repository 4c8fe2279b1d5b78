// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ac project` — project CRUD.

use crate::output::{format_or_json, OutputFormat};
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Create a project.
    Create { name: String },
    /// Show a project by id.
    Show { id: String },
    /// Archive a project.
    Archive { id: String },
}

pub fn run(root: &Path, args: ProjectArgs, output: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        ProjectCommand::Create { name } => {
            let project = ac_storage::entities::project::create_project(root, &name, super::now_ms())?;
            format_or_json(output, &project, || println!("Created project '{}' ({})", project.name, project.id))
        }
        ProjectCommand::Show { id } => {
            let project_id = ac_core::ProjectId::from_string(id);
            let project = ac_storage::entities::project::read_project(root, project_id)?;
            format_or_json(output, &project, || println!("{} ({}, {})", project.name, project.id, project.status))
        }
        ProjectCommand::Archive { id } => {
            let project_id = ac_core::ProjectId::from_string(id);
            let project = ac_storage::entities::project::archive_project(root, project_id)?;
            format_or_json(output, &project, || println!("Archived project '{}'", project.name))
        }
    }
}
