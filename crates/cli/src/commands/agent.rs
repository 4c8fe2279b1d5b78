// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ac agent` — agent CRUD.

use crate::output::{format_or_json, OutputFormat};
use ac_core::AgentRole;
use ac_storage::entities::agent::NewAgent;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args)]
pub struct AgentArgs {
    #[command(subcommand)]
    pub command: AgentCommand,
}

#[derive(Subcommand)]
pub enum AgentCommand {
    /// Create an agent.
    Create {
        name: String,
        #[arg(long, value_enum)]
        role: AgentRoleArg,
        #[arg(long)]
        provider: String,
        #[arg(long)]
        launcher: String,
        #[arg(long)]
        team: Option<String>,
    },
    /// Show an agent by id.
    Show { id: String },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum AgentRoleArg {
    Ceo,
    Director,
    Manager,
    Worker,
}

impl From<AgentRoleArg> for AgentRole {
    fn from(r: AgentRoleArg) -> Self {
        match r {
            AgentRoleArg::Ceo => AgentRole::Ceo,
            AgentRoleArg::Director => AgentRole::Director,
            AgentRoleArg::Manager => AgentRole::Manager,
            AgentRoleArg::Worker => AgentRole::Worker,
        }
    }
}

pub fn run(root: &Path, args: AgentArgs, output: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        AgentCommand::Create { name, role, provider, launcher, team } => {
            let team_id = team.map(ac_core::TeamId::from_string);
            let new_agent = NewAgent { name, role: role.into(), provider, launcher, team_id };
            let agent = ac_storage::entities::agent::create_agent(root, new_agent, super::now_ms())?;
            format_or_json(output, &agent, || println!("Created agent '{}' ({})", agent.name, agent.id))
        }
        AgentCommand::Show { id } => {
            let agent_id = ac_core::AgentId::from_string(id);
            let agent = ac_storage::entities::agent::read_agent(root, agent_id)?;
            format_or_json(output, &agent, || println!("{} ({}, {})", agent.name, agent.id, agent.role))
        }
    }
}
