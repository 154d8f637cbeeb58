// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

async fn populate(ctx: &TestContext) {
    create(ctx, "t", Lifespan::Turn).await;
    create(ctx, "c", Lifespan::Context).await;
    create(ctx, "s", Lifespan::Session).await;
    create_in(ctx, "s2", Lifespan::Session, "sess-2").await;
    create_in(ctx, "w", Lifespan::Workflow, "wf-1").await;
    create(ctx, "p", Lifespan::Project).await;
}

#[yare::parameterized(
    everything   = { RecordFilter::all(),                           &["c", "p", "s", "s2", "t", "w"] },
    turn         = { RecordFilter::by_lifespan(Lifespan::Turn),     &["t"] },
    session      = { RecordFilter::by_lifespan(Lifespan::Session),  &["s", "s2"] },
    by_scope     = { RecordFilter::by_scope(SESSION),               &["c", "s", "t"] },
    scoped_tier  = { RecordFilter::by_lifespan(Lifespan::Session).scope("sess-2"), &["s2"] },
    by_name      = { RecordFilter::all().name("w"),                 &["w"] },
    no_match     = { RecordFilter::all().name("zzz"),               &[] },
)]
fn list_applies_filter(filter: RecordFilter, expected: &[&str]) {
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    rt.block_on(async {
        let ctx = setup();
        populate(&ctx).await;
        assert_eq!(names(&ctx, &filter).await, expected);
    });
}

#[tokio::test]
async fn session_agents_spans_tiers() {
    let ctx = setup();
    populate(&ctx).await;
    let mut found: Vec<_> =
        ctx.registry.session_agents(SESSION).await.unwrap().into_iter().map(|r| r.name).collect();
    found.sort();
    assert_eq!(found, ["c", "s", "t"]);
}

#[tokio::test]
async fn stats_counts_every_lifespan() {
    let ctx = setup();
    populate(&ctx).await;
    ctx.registry.dispose_by_lifespan(Lifespan::Context).await.unwrap();

    let stats = ctx.registry.stats().await.unwrap();
    assert_eq!(stats.len(), Lifespan::ALL.len());
    assert_eq!(stats[&Lifespan::Ephemeral], 0);
    assert_eq!(stats[&Lifespan::Turn], 1);
    assert_eq!(stats[&Lifespan::Context], 0);
    assert_eq!(stats[&Lifespan::Session], 2);
    assert_eq!(stats[&Lifespan::Workflow], 1);
    assert_eq!(stats[&Lifespan::Project], 1);
}

#[tokio::test]
async fn list_skips_corrupt_documents_and_reports_them() {
    let ctx = setup();
    create(&ctx, "good", Lifespan::Session).await;
    let bad = ctx.dir.path().join("session").join(SESSION).join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    ctx.observer.clear();

    assert_eq!(names(&ctx, &RecordFilter::all()).await, ["good"]);
    assert_eq!(ctx.observer.events(), [RegistryEvent::CorruptEntriesSkipped { count: 1 }]);
    assert!(bad.exists());
}

#[tokio::test]
async fn clean_listing_reports_nothing() {
    let ctx = setup();
    populate(&ctx).await;
    ctx.observer.clear();
    ctx.registry.list(&RecordFilter::all()).await.unwrap();
    assert!(ctx.observer.events().is_empty());
}
