// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ac team` — team CRUD.

use crate::output::{format_or_json, OutputFormat};
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args)]
pub struct TeamArgs {
    #[command(subcommand)]
    pub command: TeamCommand,
}

#[derive(Subcommand)]
pub enum TeamCommand {
    /// Create a team.
    Create { name: String },
    /// Show a team by id.
    Show { id: String },
}

pub fn run(root: &Path, args: TeamArgs, output: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        TeamCommand::Create { name } => {
            let team = ac_storage::entities::team::create_team(root, &name, super::now_ms())?;
            format_or_json(output, &team, || println!("Created team '{}' ({})", team.name, team.id))
        }
        TeamCommand::Show { id } => {
            let team_id = ac_core::TeamId::from_string(id);
            let team = ac_storage::entities::team::read_team(root, team_id)?;
            format_or_json(output, &team, || println!("{} ({})", team.name, team.id))
        }
    }
}
