// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! roster: lifecycle-scoped agent records from the command line

mod commands;
mod env;
mod exit_error;
mod logging;
mod meta;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_core::AmbientScope;
use roster_engine::{Registry, RegistryConfig, TracingObserver};
use std::path::PathBuf;
use std::sync::Arc;

use commands::{agent, hook, workflow};
use exit_error::{from_registry, ExitError};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "roster", version, about = "Lifecycle-scoped agent registry")]
struct Cli {
    /// State directory for durable agents
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    #[arg(long, short, global = true, value_enum, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find or create an agent
    Create(agent::CreateArgs),
    /// Resume an agent by name, shortest lifespan first
    Resume(agent::ResumeArgs),
    /// Show one agent by id
    Get { id: String },
    /// List agents
    List(agent::ListArgs),
    /// Dispose of one agent by id
    Dispose { id: String },
    /// Dispose of every agent with a lifespan
    DisposeLifespan { lifespan: String },
    /// Dispose of every agent in a scope, across tiers
    DisposeScope { scope: String },
    /// Workflow agents
    Workflow(workflow::WorkflowArgs),
    /// Agent counts per lifespan
    Stats,
    /// Host lifecycle hooks
    Hook(hook::HookArgs),
}

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {}", exit.message);
                }
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let state_dir = env::state_dir(cli.state_dir)?;
    let cwd = std::env::current_dir().context("cannot read the working directory")?;
    let mut ambient = AmbientScope::new(cwd);
    ambient.session_id = env::session_id();
    tracing::debug!(state_dir = %state_dir.display(), session = ?ambient.session_id, "opening registry");

    let registry = Registry::new(RegistryConfig::new(state_dir).ambient(ambient))
        .map_err(from_registry)?
        .with_observer(Arc::new(TracingObserver));
    let format = cli.output;

    match cli.command {
        Commands::Create(args) => agent::create(args, &registry, format).await,
        Commands::Resume(args) => agent::resume(args, &registry, format).await,
        Commands::Get { id } => agent::get(&id, &registry, format).await,
        Commands::List(args) => agent::list(args, &registry, format).await,
        Commands::Dispose { id } => agent::dispose(&id, &registry, format).await,
        Commands::DisposeLifespan { lifespan } => {
            agent::dispose_lifespan(&lifespan, &registry, format).await
        }
        Commands::DisposeScope { scope } => agent::dispose_scope(&scope, &registry, format).await,
        Commands::Workflow(args) => workflow::handle(args.command, &registry, format).await,
        Commands::Stats => agent::stats(&registry, format).await,
        Commands::Hook(args) => hook::handle(args.command, &registry, format).await,
    }
}
