// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::{ParseLifespanError, ParseModelError};
use roster_storage::StorageError;
use thiserror::Error;

/// A request rejected before any storage access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("agent name must not be empty")]
    EmptyName,
    #[error("workflow lifespan requires a workflow id")]
    MissingWorkflowId,
    #[error("{kind} '{value}' cannot be stored on disk")]
    UnsafeKey { kind: &'static str, value: String },
    #[error(transparent)]
    UnknownLifespan(#[from] ParseLifespanError),
    #[error(transparent)]
    UnknownModel(#[from] ParseModelError),
}

/// Errors surfaced by registry operations. None are retried.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),
    #[error(
        "no agent named '{name}'{} in any tier",
        scope.as_deref().map(|s| format!(" with scope '{}'", s)).unwrap_or_default()
    )]
    NotFound { name: String, scope: Option<String> },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RegistryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}
