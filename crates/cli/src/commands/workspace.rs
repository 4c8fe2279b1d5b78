// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ac workspace` — init / validate / doctor (spec §4.I).

use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args)]
pub struct WorkspaceArgs {
    #[command(subcommand)]
    pub command: WorkspaceCommand,
}

#[derive(Subcommand)]
pub enum WorkspaceCommand {
    /// Create the workspace skeleton with defaults.
    Init {
        /// Name of the Company record.
        #[arg(long)]
        name: String,
        /// Initialize even if the directory already has content.
        #[arg(long)]
        force: bool,
    },
    /// Parse every persisted entity against its schema.
    Validate,
    /// Run operational health checks.
    Doctor,
}

pub fn run(root: &Path, args: WorkspaceArgs, output: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        WorkspaceCommand::Init { name, force } => {
            let company = ac_storage::init::init(root, &name, force)?;
            format_or_json(output, &company, || {
                println!("Initialized workspace '{}' at {}", company.name, root.display());
            })
        }
        WorkspaceCommand::Validate => {
            let report = ac_storage::validate::validate(root);
            if !report.ok() {
                for issue in &report.issues {
                    eprintln!("{issue}");
                }
                return Err(ExitError::new(2, format!("{} validation issue(s) found", report.issues.len())).into());
            }
            match output {
                OutputFormat::Json => println!("{{\"ok\":true,\"issues\":[]}}"),
                OutputFormat::Text => println!("workspace is valid"),
            }
            Ok(())
        }
        WorkspaceCommand::Doctor => {
            let report = ac_storage::doctor::doctor(root);
            match output {
                OutputFormat::Json => {
                    let checks: Vec<_> = report
                        .checks
                        .iter()
                        .map(|c| serde_json::json!({"name": c.name, "ok": c.ok, "message": c.message}))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&checks)?);
                }
                OutputFormat::Text => {
                    for check in &report.checks {
                        let mark = if check.ok { "ok" } else { "FAIL" };
                        println!("[{mark}] {}: {}", check.name, check.message);
                    }
                }
            }
            if !report.ok() {
                return Err(ExitError::new(1, "one or more doctor checks failed").into());
            }
            Ok(())
        }
    }
}
