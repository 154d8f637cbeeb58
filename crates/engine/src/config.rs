// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::AmbientScope;
use std::path::PathBuf;

/// Everything a [`Registry`](crate::Registry) needs from its environment.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base directory of the durable tier
    pub state_dir: PathBuf,
    /// Session id and working directory used when requests name no scope
    pub ambient: AmbientScope,
}

impl RegistryConfig {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self { state_dir: state_dir.into(), ambient: AmbientScope::default() }
    }

    roster_core::setters! {
        set {
            ambient: AmbientScope,
        }
    }
}
