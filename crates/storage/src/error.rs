// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::Lifespan;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in storage operations.
///
/// A missing file is never an error, and neither is an unparseable document
/// met while scanning (those are skipped and counted).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode record for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {kind} '{value}': must be a single non-empty path segment")]
    InvalidKey { kind: &'static str, value: String },
    #[error("lifespan '{0}' is not stored durably")]
    NotDurable(Lifespan),
}

impl StorageError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
        let path = path.to_path_buf();
        move |source| StorageError::Io { path, source }
    }
}
