// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn dispose_removes_record() {
    let ctx = setup();
    let record = create(&ctx, "a", Lifespan::Session).await;

    assert!(ctx.registry.dispose(&record.id).await.unwrap());
    assert!(ctx.registry.get(&record.id).await.unwrap().is_none());
    assert!(!ctx.dir.path().join("session").join(SESSION).exists());
}

#[tokio::test]
async fn dispose_unknown_id_is_a_no_op() {
    let ctx = setup();
    let id = RecordId::new();
    assert!(!ctx.registry.dispose(&id).await.unwrap());
    assert!(ctx.registry.get(&id).await.unwrap().is_none());
    assert!(ctx.observer.events().is_empty());
}

#[tokio::test]
async fn get_finds_records_in_every_backend() {
    let ctx = setup();
    for lifespan in Lifespan::ALL {
        let record = create_in(&ctx, "a", lifespan, "s").await;
        let found = ctx.registry.get(&record.id).await.unwrap().unwrap();
        assert_eq!(found, record, "{lifespan}");
    }
}

#[tokio::test]
async fn dispose_by_lifespan_counts_only_that_lifespan() {
    let ctx = setup();
    create(&ctx, "a", Lifespan::Turn).await;
    create(&ctx, "b", Lifespan::Turn).await;
    create(&ctx, "c", Lifespan::Context).await;

    assert_eq!(ctx.registry.dispose_by_lifespan(Lifespan::Turn).await.unwrap(), 2);
    let left = ctx.registry.list(&RecordFilter::all()).await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].lifespan, Lifespan::Context);
}

#[tokio::test]
async fn dispose_by_lifespan_on_durable_tier() {
    let ctx = setup();
    create_in(&ctx, "a", Lifespan::Session, "s1").await;
    create_in(&ctx, "b", Lifespan::Session, "s2").await;
    create(&ctx, "c", Lifespan::Project).await;

    assert_eq!(ctx.registry.dispose_by_lifespan(Lifespan::Session).await.unwrap(), 2);
    assert_eq!(names(&ctx, &RecordFilter::all()).await, ["c"]);
    assert_eq!(ctx.registry.dispose_by_lifespan(Lifespan::Session).await.unwrap(), 0);
}

#[tokio::test]
async fn dispose_by_scope_leaves_other_scopes() {
    let ctx = setup();
    create_in(&ctx, "a", Lifespan::Session, "s1").await;
    create_in(&ctx, "b", Lifespan::Session, "s2").await;

    assert_eq!(ctx.registry.dispose_by_scope("s1").await.unwrap(), 1);
    assert_eq!(names(&ctx, &RecordFilter::all()).await, ["b"]);
}

#[tokio::test]
async fn dispose_by_scope_spans_tiers() {
    let ctx = setup();
    create(&ctx, "t", Lifespan::Turn).await;
    create(&ctx, "c", Lifespan::Context).await;
    create(&ctx, "s", Lifespan::Session).await;
    create(&ctx, "p", Lifespan::Project).await;

    assert_eq!(ctx.registry.dispose_by_scope(SESSION).await.unwrap(), 3);
    assert_eq!(names(&ctx, &RecordFilter::all()).await, ["p"]);
}

#[tokio::test]
async fn session_end_hook_cleans_the_session() {
    let ctx = setup();
    create(&ctx, "t", Lifespan::Turn).await;
    create(&ctx, "s", Lifespan::Session).await;
    create_in(&ctx, "other", Lifespan::Session, "sess-2").await;

    assert_eq!(ctx.registry.on_session_end(SESSION).await.unwrap(), 2);
    assert_eq!(names(&ctx, &RecordFilter::all()).await, ["other"]);
}

#[tokio::test]
async fn turn_end_hook_keeps_context_records() {
    let ctx = setup();
    create(&ctx, "t", Lifespan::Turn).await;
    create(&ctx, "c", Lifespan::Context).await;

    assert_eq!(ctx.registry.on_turn_end().await.unwrap(), 1);
    assert_eq!(names(&ctx, &RecordFilter::all()).await, ["c"]);
}

#[tokio::test]
async fn disposal_notifications() {
    let ctx = setup();
    let record = create(&ctx, "a", Lifespan::Turn).await;
    create(&ctx, "b", Lifespan::Turn).await;
    ctx.observer.clear();

    ctx.registry.dispose(&record.id).await.unwrap();
    ctx.registry.dispose_by_lifespan(Lifespan::Turn).await.unwrap();
    ctx.registry.dispose_by_scope("nowhere").await.unwrap();

    let events = ctx.observer.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].record().map(|r| r.id.clone()), Some(record.id));
    assert_eq!(
        events[1],
        RegistryEvent::BulkCleanup { target: CleanupTarget::Lifespan(Lifespan::Turn), count: 1 }
    );
    assert_eq!(
        events[2],
        RegistryEvent::BulkCleanup { target: CleanupTarget::Scope("nowhere".into()), count: 0 }
    );
}
