// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! roster-engine: the lifecycle registry
//!
//! [`Registry`] routes each lifespan to its backend, implements
//! find-or-create, resume, and the disposal operations, and reports every
//! outcome to an injected [`Observer`].

mod config;
mod error;
mod locks;
mod observer;
mod registry;
mod request;

#[cfg(test)]
mod test_support;

pub use config::RegistryConfig;
pub use error::{RegistryError, ValidationError};
pub use observer::{FanoutObserver, NoopObserver, Observer, TracingObserver};
pub use registry::Registry;
pub use request::{CreateRequest, Created, StartWorkflow};
