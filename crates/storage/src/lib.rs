// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Storage backends for the roster registry
//!
//! Two structurally different stores satisfy one [`RecordStore`] contract:
//! an in-process map for volatile lifespans and a JSON file tree for
//! durable ones.

mod durable;
mod error;
mod store;
mod volatile;

pub use durable::DurableStore;
pub use error::StorageError;
pub use store::{RecordStore, Scan};
pub use volatile::VolatileStore;
