// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `roster workflow` - Workflow-scoped agents

use anyhow::Result;
use clap::{Args, Subcommand};
use roster_core::Clock;
use roster_engine::{Registry, StartWorkflow};

use super::parse_model;
use crate::exit_error::from_registry;
use crate::meta;
use crate::output::{self, emit, OutputFormat};

#[derive(Args)]
pub struct WorkflowArgs {
    #[command(subcommand)]
    pub command: WorkflowCommand,
}

#[derive(Subcommand)]
pub enum WorkflowCommand {
    /// Find or create an agent inside a workflow
    Start {
        /// Workflow id
        workflow: String,
        /// Agent name
        name: String,
        /// haiku, sonnet, or opus (default haiku)
        #[arg(long, short)]
        model: Option<String>,
        /// Metadata entry, KEY=VALUE as a string or KEY:=JSON; repeatable
        #[arg(long = "meta", value_name = "KEY=VALUE")]
        meta: Vec<String>,
    },
    /// Dispose of every agent in a workflow
    Complete {
        /// Workflow id
        workflow: String,
    },
    /// List the agents in a workflow
    Agents {
        /// Workflow id
        workflow: String,
    },
}

pub async fn handle<C: Clock>(
    command: WorkflowCommand,
    registry: &Registry<C>,
    format: OutputFormat,
) -> Result<()> {
    match command {
        WorkflowCommand::Start { workflow, name, model, meta } => {
            let mut start = StartWorkflow::new(workflow, name).metadata(meta::parse_pairs(&meta)?);
            start.model = model.as_deref().map(parse_model).transpose()?;

            let created = registry.start_workflow(start).await.map_err(from_registry)?;
            emit(format, &created, || {
                let verb = if created.is_new { "Started" } else { "Rejoined" };
                format!(
                    "{verb} agent '{}' ({}) in workflow {}",
                    created.record.name, created.record.id, created.record.scope
                )
            })
        }
        WorkflowCommand::Complete { workflow } => {
            let count = registry.complete_workflow(&workflow).await.map_err(from_registry)?;
            super::agent::print_disposed(format, count, &format!("workflow {workflow}"))
        }
        WorkflowCommand::Agents { workflow } => {
            let records = registry.workflow_agents(&workflow).await.map_err(from_registry)?;
            emit(format, &records, || output::record_table(&records, registry.clock().now()))
        }
    }
}
