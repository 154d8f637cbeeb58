// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scope derivation.
//!
//! A scope partitions records of the same name into independent namespaces.
//! Resolution is pure: the ambient session id and working directory are
//! handed in through [`AmbientScope`] rather than read from the process.
//!
//! | lifespan  | explicit input                | fallback                          |
//! |-----------|-------------------------------|-----------------------------------|
//! | ephemeral | none                          | `"ephemeral"`                     |
//! | turn      | `scope`                       | ambient session, `"unknown-turn"` |
//! | context   | `scope`                       | ambient session, `"unknown-context"` |
//! | session   | `session_id`, then `scope`    | ambient session, `"unknown-session"` |
//! | workflow  | `workflow_id` (required)      | none                              |
//! | project   | `project_path`, then `scope`  | ambient cwd                       |

use crate::lifespan::Lifespan;
use std::path::PathBuf;

pub const EPHEMERAL_SCOPE: &str = "ephemeral";
pub const UNKNOWN_TURN: &str = "unknown-turn";
pub const UNKNOWN_CONTEXT: &str = "unknown-context";
pub const UNKNOWN_SESSION: &str = "unknown-session";

/// Process-level context used when a request names no scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientScope {
    /// Host session identifier, if the environment supplied one
    pub session_id: Option<String>,
    /// Working directory, the default project scope
    pub cwd: PathBuf,
}

impl AmbientScope {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { session_id: None, cwd: cwd.into() }
    }

    crate::setters! {
        option {
            session_id: String,
        }
    }
}

/// Explicit scope inputs carried by a creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeRequest {
    pub scope: Option<String>,
    pub session_id: Option<String>,
    pub workflow_id: Option<String>,
    pub project_path: Option<PathBuf>,
}

/// Maps a lifespan plus explicit inputs to a scope string.
#[derive(Debug, Clone, Default)]
pub struct ScopeResolver {
    ambient: AmbientScope,
}

impl ScopeResolver {
    pub fn new(ambient: AmbientScope) -> Self {
        Self { ambient }
    }

    pub fn ambient(&self) -> &AmbientScope {
        &self.ambient
    }

    /// Scope for a new record. `None` only for a workflow without an id.
    pub fn resolve(&self, lifespan: Lifespan, request: &ScopeRequest) -> Option<String> {
        let scope = non_empty(&request.scope);
        match lifespan {
            Lifespan::Ephemeral => Some(EPHEMERAL_SCOPE.to_string()),
            Lifespan::Turn | Lifespan::Context => {
                scope.map(str::to_string).or_else(|| self.default_for(lifespan))
            }
            Lifespan::Session => non_empty(&request.session_id)
                .or(scope)
                .map(str::to_string)
                .or_else(|| self.default_for(lifespan)),
            Lifespan::Workflow => non_empty(&request.workflow_id).map(str::to_string),
            Lifespan::Project => match &request.project_path {
                Some(path) if !path.as_os_str().is_empty() => Some(path_scope(path)),
                _ => scope.map(str::to_string).or_else(|| self.default_for(lifespan)),
            },
        }
    }

    /// Scope assumed when a caller names none. Workflows have no default.
    pub fn default_for(&self, lifespan: Lifespan) -> Option<String> {
        let session = non_empty(&self.ambient.session_id);
        match lifespan {
            Lifespan::Ephemeral => Some(EPHEMERAL_SCOPE.to_string()),
            Lifespan::Turn => Some(session.unwrap_or(UNKNOWN_TURN).to_string()),
            Lifespan::Context => Some(session.unwrap_or(UNKNOWN_CONTEXT).to_string()),
            Lifespan::Session => Some(session.unwrap_or(UNKNOWN_SESSION).to_string()),
            Lifespan::Workflow => None,
            Lifespan::Project => Some(path_scope(&self.ambient.cwd)),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn path_scope(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
