// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `roster hook` - Host lifecycle boundaries
//!
//! Wired into the host's turn-end and session-end hooks so volatile and
//! session-scoped agents are cleaned up when their boundary passes.

use anyhow::Result;
use clap::{Args, Subcommand};
use roster_core::Clock;
use roster_engine::Registry;

use crate::exit_error::{from_registry, ExitError};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct HookArgs {
    #[command(subcommand)]
    pub command: HookCommand,
}

#[derive(Subcommand)]
pub enum HookCommand {
    /// The current turn ended: dispose turn agents
    TurnEnd,
    /// A session ended: dispose everything scoped to it
    SessionEnd {
        /// Session id (defaults to ROSTER_SESSION_ID / CLAUDE_SESSION_ID)
        #[arg(long)]
        session: Option<String>,
    },
}

pub async fn handle<C: Clock>(
    command: HookCommand,
    registry: &Registry<C>,
    format: OutputFormat,
) -> Result<()> {
    match command {
        HookCommand::TurnEnd => {
            let count = registry.on_turn_end().await.map_err(from_registry)?;
            super::agent::print_disposed(format, count, "turn end")
        }
        HookCommand::SessionEnd { session } => {
            let session = session
                .or_else(|| registry.resolver().ambient().session_id.clone())
                .ok_or_else(|| ExitError::invalid("no session id: pass --session or set ROSTER_SESSION_ID"))?;
            let count = registry.on_session_end(&session).await.map_err(from_registry)?;
            super::agent::print_disposed(format, count, &format!("session {session}"))
        }
    }
}
