// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ac`: a thin command-line front end over the workspace engine, used for
//! manual operation and as the harness the integration test suite drives.

mod color;
mod commands;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "ac", about = "AgentCompany workspace engine", styles = color::styles())]
struct Cli {
    /// Workspace root (defaults to the current directory).
    #[arg(long, global = true)]
    root: Option<std::path::PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Workspace lifecycle: init / validate / doctor.
    Workspace(commands::workspace::WorkspaceArgs),
    /// Team CRUD.
    Team(commands::team::TeamArgs),
    /// Agent CRUD.
    Agent(commands::agent::AgentArgs),
    /// Project CRUD.
    Project(commands::project::ProjectArgs),
    /// Task CRUD.
    Task(commands::task::TaskArgs),
    /// Launch and manage subprocess sessions.
    Run(commands::run::RunArgs),
    /// The review inbox.
    Review(commands::review::ReviewArgs),
}

fn workspace_root(explicit: Option<std::path::PathBuf>) -> anyhow::Result<std::path::PathBuf> {
    match explicit {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = match workspace_root(cli.root) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Workspace(args) => commands::workspace::run(&root, args, cli.output),
        Command::Team(args) => commands::team::run(&root, args, cli.output),
        Command::Agent(args) => commands::agent::run(&root, args, cli.output),
        Command::Project(args) => commands::project::run(&root, args, cli.output),
        Command::Task(args) => commands::task::run(&root, args, cli.output),
        Command::Run(args) => commands::run::run(&root, args, cli.output).await,
        Command::Review(args) => commands::review::run(&root, args, cli.output),
    };

    if let Err(err) = result {
        report_error(err);
    }
}

/// `AC_DEBUG=1` prints the full error chain; otherwise just the top message.
fn report_error(err: anyhow::Error) {
    let code = err.downcast_ref::<ExitError>().map(|e| e.code).unwrap_or(1);
    if std::env::var("AC_DEBUG").as_deref() == Ok("1") {
        eprintln!("ERROR: {err:?}");
    } else {
        eprintln!("ERROR: {err}");
    }
    std::process::exit(code);
}
