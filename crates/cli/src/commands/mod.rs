// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod agent;
pub mod hook;
pub mod workflow;

use roster_core::{Lifespan, Model};
use roster_engine::ValidationError;

use crate::exit_error::from_registry;

/// Parse a lifespan name, failing with the validation exit code.
pub(crate) fn parse_lifespan(name: &str) -> anyhow::Result<Lifespan> {
    name.parse::<Lifespan>().map_err(|e| invalid(e.into()))
}

pub(crate) fn parse_model(name: &str) -> anyhow::Result<Model> {
    name.parse::<Model>().map_err(|e| invalid(e.into()))
}

pub(crate) fn invalid(err: ValidationError) -> anyhow::Error {
    from_registry(err.into())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
