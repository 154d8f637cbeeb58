// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tracing_subscriber::EnvFilter;

use crate::env::LOG_ENV;

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber, filtered by `ROSTER_LOG` (default `warn`).
///
/// stdout carries command output only.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
