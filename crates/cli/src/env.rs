// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Log filter directives, e.g. `roster=debug`.
pub const LOG_ENV: &str = "ROSTER_LOG";

/// Resolve state directory: flag > ROSTER_STATE_DIR > XDG_STATE_HOME/roster > ~/.local/state/roster
pub fn state_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = non_empty("ROSTER_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = non_empty("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("roster"));
    }
    let home = dirs::home_dir().context("cannot locate a state directory: HOME is not set")?;
    Ok(home.join(".local/state/roster"))
}

/// Host session id: ROSTER_SESSION_ID, else CLAUDE_SESSION_ID.
pub fn session_id() -> Option<String> {
    non_empty("ROSTER_SESSION_ID").or_else(|| non_empty("CLAUDE_SESSION_ID"))
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
