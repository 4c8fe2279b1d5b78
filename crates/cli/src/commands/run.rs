// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ac run` — launch a subprocess session and wait for its outcome.
//!
//! A CLI invocation is its own process, so there is no long-lived session
//! registry to poll across invocations; `launch` drives a session from
//! start to finish within the one process, the same way
//! [`ac_runtime::session::drive_session`] is meant to be driven.

use crate::output::{format_or_json, handle_list, OutputFormat};
use ac_runtime::{begin_run, drive_session, BuiltCommand, SessionParams};
use clap::{Args, Subcommand};
use std::io::Write;
use std::path::Path;
use tokio_util::sync::CancellationToken;

#[derive(Args)]
pub struct RunArgs {
    #[command(subcommand)]
    pub command: RunCommand,
}

#[derive(Subcommand)]
pub enum RunCommand {
    /// Launch a provider CLI and wait for it to finish (or be cancelled).
    Launch {
        #[arg(long)]
        project: String,
        #[arg(long)]
        agent: String,
        #[arg(long)]
        provider: String,
        /// Maximum time to let the session run before sending SIGTERM.
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Provider argv; pass after `--`.
        #[arg(last = true, required = true)]
        argv: Vec<String>,
    },
    /// Replay a run's event log.
    Events {
        #[arg(long)]
        project: String,
        id: String,
    },
    /// List runs known to a project, most recent first.
    List {
        #[arg(long)]
        project: String,
    },
}

/// Serializable projection of [`ac_index::RunRow`] for `list` output; the
/// index row type itself carries no `Serialize` impl since it is an
/// internal projection, not a wire format.
#[derive(serde::Serialize)]
struct RunListItem {
    run_id: String,
    status: String,
    provider: String,
    agent_id: String,
    created_at: String,
}

impl From<ac_index::RunRow> for RunListItem {
    fn from(row: ac_index::RunRow) -> Self {
        RunListItem { run_id: row.run_id, status: row.status, provider: row.provider, agent_id: row.agent_id, created_at: row.created_at }
    }
}

pub async fn run(root: &Path, args: RunArgs, output: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        RunCommand::Launch { project, agent, provider, timeout_secs, argv } => {
            let project_id = ac_core::ProjectId::from_string(project);
            let agent_id = ac_core::AgentId::from_string(agent);
            let machine = ac_storage::machine::read_machine_config(root)?;

            let params = SessionParams {
                root: root.to_path_buf(),
                project_id,
                agent_id,
                provider,
                command: BuiltCommand::new(argv),
                machine,
            };

            let run = begin_run(&params)?;
            let cancel = CancellationToken::new();
            if let Some(secs) = timeout_secs {
                let cancel = cancel.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
                    cancel.cancel();
                });
            }

            let outcome = drive_session(params, run, cancel).await?;
            format_or_json(output, &outcome.run, || {
                println!("Run {} finished: {}", outcome.run.id, outcome.run.status);
                if !outcome.final_text.is_empty() {
                    println!("\n{}", outcome.final_text);
                }
            })
        }
        RunCommand::Events { project, id } => {
            let project_id = ac_core::ProjectId::from_string(project);
            let run_id = ac_core::RunId::from_string(id);
            let path = ac_storage::layout::run_events_jsonl_path(root, project_id, run_id);
            let result = ac_eventlog::replay(&path)?;
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.events)?),
                OutputFormat::Text => {
                    for event in &result.events {
                        println!("{} {}", event.event_id, event.kind.type_name());
                    }
                }
            }
            Ok(())
        }
        RunCommand::List { project } => {
            let project_id = ac_core::ProjectId::from_string(project);
            let index = ac_index::ensure_synced(root)?;
            let rows: Vec<RunListItem> = index.runs_for_project(&project_id.to_string())?.into_iter().map(RunListItem::from).collect();
            handle_list(output, &rows, "no runs yet", |rows, w| {
                for row in rows {
                    let _ = writeln!(w, "{} [{}] {} via {}", row.run_id, row.status, row.agent_id, row.provider);
                }
            })
        }
    }
}
