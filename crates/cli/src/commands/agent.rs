// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record commands: create, resume, get, list, dispose, stats.

use anyhow::Result;
use clap::Args;
use roster_core::{Clock, RecordFilter, RecordId};
use roster_engine::{CreateRequest, Registry};
use serde_json::json;
use std::path::PathBuf;

use super::{invalid, parse_lifespan, parse_model};
use crate::exit_error::{from_registry, ExitError};
use crate::meta;
use crate::output::{self, emit, OutputFormat};

#[derive(Args)]
pub struct CreateArgs {
    /// Agent name, unique within its tier and scope
    pub name: String,
    /// ephemeral, turn, context, session, workflow, or project
    #[arg(long, short)]
    pub lifespan: String,
    /// Explicit scope (turn, context, session, project)
    #[arg(long)]
    pub scope: Option<String>,
    /// Session id for session-lifespan agents
    #[arg(long)]
    pub session: Option<String>,
    /// Workflow id, required for workflow-lifespan agents
    #[arg(long)]
    pub workflow: Option<String>,
    /// Project path for project-lifespan agents (defaults to cwd)
    #[arg(long)]
    pub project: Option<PathBuf>,
    /// haiku, sonnet, or opus (default haiku)
    #[arg(long, short)]
    pub model: Option<String>,
    /// Metadata entry, KEY=VALUE as a string or KEY:=JSON; repeatable
    #[arg(long = "meta", value_name = "KEY=VALUE")]
    pub meta: Vec<String>,
}

#[derive(Args)]
pub struct ResumeArgs {
    pub name: String,
    /// Only look in this scope (required to reach workflow agents)
    #[arg(long)]
    pub scope: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, short)]
    pub lifespan: Option<String>,
    #[arg(long)]
    pub scope: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
}

pub async fn create<C: Clock>(
    args: CreateArgs,
    registry: &Registry<C>,
    format: OutputFormat,
) -> Result<()> {
    let mut request = CreateRequest::parse(args.name, &args.lifespan).map_err(invalid)?;
    request.model = args.model.as_deref().map(parse_model).transpose()?;
    request.scope = args.scope;
    request.session_id = args.session;
    request.workflow_id = args.workflow;
    request.project_path = args.project;
    request.metadata = meta::parse_pairs(&args.meta)?;

    let created = registry.create(request).await.map_err(from_registry)?;
    emit(format, &created, || {
        let verb = if created.is_new { "Created" } else { "Reused" };
        let r = &created.record;
        format!("{verb} agent '{}' ({}) [{}:{}]", r.name, r.id, r.lifespan, r.scope)
    })
}

pub async fn resume<C: Clock>(
    args: ResumeArgs,
    registry: &Registry<C>,
    format: OutputFormat,
) -> Result<()> {
    let record = registry.resume(&args.name, args.scope.as_deref()).await.map_err(from_registry)?;
    emit(format, &record, || {
        format!(
            "Resumed agent '{}' ({}) [{}:{}], turn {}",
            record.name, record.id, record.lifespan, record.scope, record.turn_count
        )
    })
}

pub async fn get<C: Clock>(id: &str, registry: &Registry<C>, format: OutputFormat) -> Result<()> {
    let id = RecordId::from_string(id);
    let Some(record) = registry.get(&id).await.map_err(from_registry)? else {
        return Err(ExitError::not_found(format!("agent not found: {id}")).into());
    };
    emit(format, &record, || output::record_detail(&record))
}

pub async fn list<C: Clock>(
    args: ListArgs,
    registry: &Registry<C>,
    format: OutputFormat,
) -> Result<()> {
    let filter = RecordFilter {
        lifespan: args.lifespan.as_deref().map(parse_lifespan).transpose()?,
        scope: args.scope,
        name: args.name,
    };
    let records = registry.list(&filter).await.map_err(from_registry)?;
    emit(format, &records, || output::record_table(&records, registry.clock().now()))
}

pub async fn dispose<C: Clock>(
    id: &str,
    registry: &Registry<C>,
    format: OutputFormat,
) -> Result<()> {
    let id = RecordId::from_string(id);
    if !registry.dispose(&id).await.map_err(from_registry)? {
        return Err(ExitError::not_found(format!("agent not found: {id}")).into());
    }
    emit(format, &json!({ "id": id.as_str(), "disposed": true }), || format!("Disposed agent {id}"))
}

pub async fn dispose_lifespan<C: Clock>(
    lifespan: &str,
    registry: &Registry<C>,
    format: OutputFormat,
) -> Result<()> {
    let lifespan = parse_lifespan(lifespan)?;
    let count = registry.dispose_by_lifespan(lifespan).await.map_err(from_registry)?;
    print_disposed(format, count, &format!("lifespan {lifespan}"))
}

pub async fn dispose_scope<C: Clock>(
    scope: &str,
    registry: &Registry<C>,
    format: OutputFormat,
) -> Result<()> {
    let count = registry.dispose_by_scope(scope).await.map_err(from_registry)?;
    print_disposed(format, count, &format!("scope {scope}"))
}

pub async fn stats<C: Clock>(registry: &Registry<C>, format: OutputFormat) -> Result<()> {
    let stats = registry.stats().await.map_err(from_registry)?;
    emit(format, &stats, || output::stats_table(&stats))
}

pub(crate) fn print_disposed(format: OutputFormat, count: usize, target: &str) -> Result<()> {
    emit(format, &json!({ "count": count }), || {
        format!("Disposed {} from {target}", output::agents(count))
    })
}
