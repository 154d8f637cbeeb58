// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifespan policies and the storage they map to.
//!
//! The mapping is a fixed table:
//!
//! ```text
//! ephemeral, turn, context   -> volatile tier (one in-process store)
//! session, workflow, project -> durable tier (one file store per lifespan)
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How long a record may live, and therefore where it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifespan {
    /// Single use; always scoped to `"ephemeral"`
    Ephemeral,
    /// Lives until the host's current turn ends
    Turn,
    /// Lives for the current context window
    Context,
    /// Lives as long as the host session
    Session,
    /// Lives until its workflow is completed
    Workflow,
    /// Lives with the project directory
    Project,
}

impl Lifespan {
    pub const ALL: [Lifespan; 6] = [
        Lifespan::Ephemeral,
        Lifespan::Turn,
        Lifespan::Context,
        Lifespan::Session,
        Lifespan::Workflow,
        Lifespan::Project,
    ];

    /// Order in which an un-typed resume searches for a record by name.
    pub const RESUME_ORDER: [Lifespan; 5] = [
        Lifespan::Turn,
        Lifespan::Context,
        Lifespan::Session,
        Lifespan::Workflow,
        Lifespan::Project,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Lifespan::Ephemeral => "ephemeral",
            Lifespan::Turn => "turn",
            Lifespan::Context => "context",
            Lifespan::Session => "session",
            Lifespan::Workflow => "workflow",
            Lifespan::Project => "project",
        }
    }

    pub fn tier(self) -> Tier {
        self.backend().tier()
    }

    /// The store instance that holds records of this lifespan.
    pub fn backend(self) -> Backend {
        match self {
            Lifespan::Ephemeral | Lifespan::Turn | Lifespan::Context => Backend::Volatile,
            Lifespan::Session => Backend::Session,
            Lifespan::Workflow => Backend::Workflow,
            Lifespan::Project => Backend::Project,
        }
    }

    pub fn is_durable(self) -> bool {
        self.tier() == Tier::Durable
    }
}

impl std::fmt::Display for Lifespan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lifespan '{0}' (expected one of: ephemeral, turn, context, session, workflow, project)")]
pub struct ParseLifespanError(pub String);

impl FromStr for Lifespan {
    type Err = ParseLifespanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lifespan::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ParseLifespanError(s.to_string()))
    }
}

/// Storage tier: whether records survive the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Volatile,
    Durable,
}

crate::simple_display! {
    Tier {
        Volatile => "volatile",
        Durable => "durable",
    }
}

/// One concrete store instance: the shared volatile map, or the file store
/// of a single durable lifespan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Volatile,
    Session,
    Workflow,
    Project,
}

impl Backend {
    /// Search order for lookups by id.
    pub const ALL: [Backend; 4] =
        [Backend::Volatile, Backend::Session, Backend::Workflow, Backend::Project];

    pub fn tier(self) -> Tier {
        match self {
            Backend::Volatile => Tier::Volatile,
            Backend::Session | Backend::Workflow | Backend::Project => Tier::Durable,
        }
    }
}

crate::simple_display! {
    Backend {
        Volatile => "volatile",
        Session => "session",
        Workflow => "workflow",
        Project => "project",
    }
}

/// Capability tier of the model an agent runs on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    /// Lowest cost
    #[default]
    Haiku,
    Sonnet,
    /// Highest capability
    Opus,
}

crate::simple_display! {
    Model {
        Haiku => "haiku",
        Sonnet => "sonnet",
        Opus => "opus",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown model '{0}' (expected one of: haiku, sonnet, opus)")]
pub struct ParseModelError(pub String);

impl FromStr for Model {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haiku" => Ok(Model::Haiku),
            "sonnet" => Ok(Model::Sonnet),
            "opus" => Ok(Model::Opus),
            other => Err(ParseModelError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "lifespan_tests.rs"]
mod tests;
