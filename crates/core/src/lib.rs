// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! roster-core: record model and pure policies for the roster registry

pub mod macros;

pub mod agent_record;
pub mod clock;
pub mod event;
pub mod filter;
pub mod id;
pub mod lifespan;
pub mod scope;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(any(test, feature = "test-support"))]
pub use agent_record::AgentRecordBuilder;
pub use agent_record::{AgentRecord, Metadata, RecordId, WORKFLOW_ID_KEY};
pub use clock::{Clock, FakeClock, SystemClock};
pub use event::{CleanupTarget, Notification, RecordRef, RegistryEvent};
pub use filter::RecordFilter;
pub use lifespan::{Backend, Lifespan, Model, ParseLifespanError, ParseModelError, Tier};
pub use scope::{AmbientScope, ScopeRequest, ScopeResolver};
