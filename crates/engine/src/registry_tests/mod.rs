// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry behavior tests

mod create;
mod dispose;
mod list;
mod resume;
mod workflow;

use super::*;
use crate::test_support::RecordingObserver;
use roster_core::{AmbientScope, FakeClock};
use tempfile::TempDir;

pub(super) const SESSION: &str = "sess-1";
pub(super) const CWD: &str = "/work/repo";

pub(super) struct TestContext {
    pub registry: Registry<FakeClock>,
    pub observer: Arc<RecordingObserver>,
    pub clock: FakeClock,
    pub dir: TempDir,
}

/// Registry on a fresh temp dir with ambient session [`SESSION`].
pub(super) fn setup() -> TestContext {
    setup_with(AmbientScope::new(CWD).session_id(SESSION))
}

pub(super) fn setup_with(ambient: AmbientScope) -> TestContext {
    let dir = tempfile::tempdir().unwrap();
    let clock = FakeClock::new();
    let observer = Arc::new(RecordingObserver::default());
    let config = RegistryConfig::new(dir.path()).ambient(ambient);
    let registry =
        Registry::with_clock(config, clock.clone()).unwrap().with_observer(observer.clone());
    TestContext { registry, observer, clock, dir }
}

pub(super) async fn create(ctx: &TestContext, name: &str, lifespan: Lifespan) -> AgentRecord {
    ctx.registry.create(CreateRequest::new(name, lifespan)).await.unwrap().record
}

pub(super) async fn create_in(
    ctx: &TestContext,
    name: &str,
    lifespan: Lifespan,
    scope: &str,
) -> AgentRecord {
    let request = match lifespan {
        Lifespan::Workflow => CreateRequest::new(name, lifespan).workflow_id(scope),
        _ => CreateRequest::new(name, lifespan).scope(scope),
    };
    ctx.registry.create(request).await.unwrap().record
}

/// Names of every listed record, sorted.
pub(super) async fn names(ctx: &TestContext, filter: &RecordFilter) -> Vec<String> {
    let mut names: Vec<String> =
        ctx.registry.list(filter).await.unwrap().into_iter().map(|r| r.name).collect();
    names.sort();
    names
}
