// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

#[tokio::test]
async fn resume_counts_turns_and_touches() {
    let ctx = setup();
    let created = create(&ctx, "a", Lifespan::Session).await;

    ctx.clock.advance(Duration::from_secs(30));
    let first = ctx.registry.resume("a", None).await.unwrap();
    let second = ctx.registry.resume("a", None).await.unwrap();

    assert_eq!(first.id, created.id);
    assert_eq!(first.turn_count, 1);
    assert_eq!(second.turn_count, 2);
    assert!(first.last_used_at > created.last_used_at);
    assert!(second.last_used_at >= first.last_used_at);

    let stored = ctx.registry.get(&created.id).await.unwrap().unwrap();
    assert_eq!(stored.turn_count, 2);
}

#[tokio::test]
async fn resume_missing_name_is_not_found() {
    let ctx = setup();
    let err = ctx.registry.resume("ghost", None).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("ghost"));
    assert!(ctx.observer.events().is_empty());
}

#[tokio::test]
async fn resume_reports_the_scope_it_was_given() {
    let ctx = setup();
    let err = ctx.registry.resume("ghost", Some("wf-7")).await.unwrap_err();
    match err {
        RegistryError::NotFound { name, scope } => {
            assert_eq!(name, "ghost");
            assert_eq!(scope.as_deref(), Some("wf-7"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn resume_prefers_the_shortest_lifespan() {
    let ctx = setup();
    let session = create(&ctx, "a", Lifespan::Session).await;
    let turn = create(&ctx, "a", Lifespan::Turn).await;

    assert_eq!(ctx.registry.resume("a", None).await.unwrap().id, turn.id);

    ctx.registry.on_turn_end().await.unwrap();
    assert_eq!(ctx.registry.resume("a", None).await.unwrap().id, session.id);
}

#[tokio::test]
async fn resume_falls_through_to_project() {
    let ctx = setup();
    let project = create(&ctx, "keeper", Lifespan::Project).await;
    let resumed = ctx.registry.resume("keeper", None).await.unwrap();
    assert_eq!(resumed.id, project.id);
    assert_eq!(resumed.scope, CWD);
}

#[tokio::test]
async fn workflow_records_need_an_explicit_scope() {
    let ctx = setup();
    let record = create_in(&ctx, "builder", Lifespan::Workflow, "wf-1").await;

    assert!(ctx.registry.resume("builder", None).await.unwrap_err().is_not_found());
    assert_eq!(ctx.registry.resume("builder", Some("wf-1")).await.unwrap().id, record.id);
}

#[tokio::test]
async fn resume_with_scope_ignores_other_scopes() {
    let ctx = setup();
    create_in(&ctx, "a", Lifespan::Session, "s1").await;
    let err = ctx.registry.resume("a", Some("s2")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn resume_without_ambient_session_uses_fallback_scopes() {
    let ctx = setup_with(AmbientScope::new(CWD));
    let record = create(&ctx, "a", Lifespan::Context).await;
    assert_eq!(record.scope, roster_core::scope::UNKNOWN_CONTEXT);
    assert_eq!(ctx.registry.resume("a", None).await.unwrap().id, record.id);
}

#[tokio::test]
async fn resume_notifies_resumed() {
    let ctx = setup();
    create(&ctx, "a", Lifespan::Turn).await;
    ctx.observer.clear();

    ctx.registry.resume("a", None).await.unwrap();
    assert_eq!(ctx.observer.kinds(), ["record_resumed"]);
}
