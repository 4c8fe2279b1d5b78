// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ac review` — the review inbox (spec §4.J).

use crate::output::OutputFormat;
use ac_core::{ReviewDecision, Role, TeamId};
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args)]
pub struct ReviewArgs {
    #[command(subcommand)]
    pub command: ReviewCommand,
}

#[derive(Subcommand)]
pub enum ReviewCommand {
    /// List artifacts awaiting a decision.
    List {
        #[arg(long)]
        project: Option<String>,
    },
    /// Decide a pending artifact.
    Resolve {
        #[arg(long)]
        project: String,
        artifact: String,
        #[arg(value_enum)]
        decision: ReviewDecisionArg,
        #[arg(long)]
        actor_id: String,
        #[arg(long, value_enum)]
        actor_role: RoleArg,
        #[arg(long)]
        actor_team: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum ReviewDecisionArg {
    Approved,
    Denied,
}

impl From<ReviewDecisionArg> for ReviewDecision {
    fn from(d: ReviewDecisionArg) -> Self {
        match d {
            ReviewDecisionArg::Approved => ReviewDecision::Approved,
            ReviewDecisionArg::Denied => ReviewDecision::Denied,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum RoleArg {
    Human,
    Ceo,
    Director,
    Manager,
    Worker,
}

impl From<RoleArg> for Role {
    fn from(r: RoleArg) -> Self {
        match r {
            RoleArg::Human => Role::Human,
            RoleArg::Ceo => Role::Ceo,
            RoleArg::Director => Role::Director,
            RoleArg::Manager => Role::Manager,
            RoleArg::Worker => Role::Worker,
        }
    }
}

pub fn run(root: &Path, args: ReviewArgs, output: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        ReviewCommand::List { project } => {
            let pending = ac_storage::review::pending(root, project.as_deref())?;
            match output {
                OutputFormat::Json => {
                    let rows: Vec<_> = pending
                        .iter()
                        .map(|p| {
                            serde_json::json!({
                                "project_id": p.project_id,
                                "artifact_id": p.artifact_id,
                                "kind": p.kind,
                                "visibility": p.visibility,
                                "created_at": p.created_at,
                                "produced_by": p.produced_by,
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                OutputFormat::Text => {
                    if pending.is_empty() {
                        println!("no pending reviews");
                    }
                    for p in &pending {
                        println!("{} [{}] {} (produced by {})", p.artifact_id, p.kind, p.visibility, p.produced_by);
                    }
                }
            }
            Ok(())
        }
        ReviewCommand::Resolve { project, artifact, decision, actor_id, actor_role, actor_team, notes } => {
            let project_id = ac_core::ProjectId::from_string(project);
            let artifact_id = ac_core::ArtifactId::from_string(artifact);
            let team_id = actor_team.map(TeamId::from_string);
            let review = ac_storage::review::resolve(
                root,
                project_id,
                artifact_id,
                decision.into(),
                actor_id,
                actor_role.into(),
                team_id,
                notes,
                super::now_ms(),
            )?;
            match output {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({
                            "id": review.id,
                            "decision": review.decision,
                            "subject": review.subject,
                        })
                    );
                }
                OutputFormat::Text => println!("Review {} recorded: {}", review.id, review.decision),
            }
            Ok(())
        }
    }
}
