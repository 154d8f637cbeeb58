// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! so that `main()` owns process termination.

use roster_engine::RegistryError;
use roster_storage::StorageError;
use std::fmt;

/// Request rejected as invalid (bad name, lifespan, model, or key).
pub const EXIT_INVALID: i32 = 2;
/// Named agent or id does not exist.
pub const EXIT_NOT_FOUND: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(EXIT_NOT_FOUND, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Attach an exit code to registry failures the user can act on.
///
/// Storage I/O failures stay plain errors and exit with 1.
pub fn from_registry(err: RegistryError) -> anyhow::Error {
    match err {
        RegistryError::Validation(_) | RegistryError::Storage(StorageError::InvalidKey { .. }) => {
            ExitError::invalid(err.to_string()).into()
        }
        RegistryError::NotFound { .. } => ExitError::not_found(err.to_string()).into(),
        RegistryError::Storage(_) => err.into(),
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
