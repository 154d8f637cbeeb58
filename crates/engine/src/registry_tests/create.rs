// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Find-or-create tests

use super::*;
use roster_core::test_support::metadata;
use roster_core::Model;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn create_twice_returns_same_record() {
    let ctx = setup();
    for lifespan in Lifespan::ALL {
        // Turn and context share the volatile namespace under the session
        // scope, so each lifespan gets its own name.
        let name = format!("{lifespan}-agent");
        let request = match lifespan {
            Lifespan::Workflow => CreateRequest::new(name, lifespan).workflow_id("wf-1"),
            _ => CreateRequest::new(name, lifespan),
        };
        let first = ctx.registry.create(request.clone()).await.unwrap();
        let second = ctx.registry.create(request).await.unwrap();

        assert!(first.is_new, "{lifespan}: first create must be new");
        assert!(!second.is_new, "{lifespan}: second create must hit");
        assert_eq!(first.record.id, second.record.id, "{lifespan}");
    }
}

#[tokio::test]
async fn create_hit_touches_and_merges_metadata() {
    let ctx = setup();
    let first = ctx
        .registry
        .create(CreateRequest::new("a", Lifespan::Session).metadata(metadata(json!({"x": 1}))))
        .await
        .unwrap();

    ctx.clock.advance(Duration::from_secs(5));
    let second = ctx
        .registry
        .create(CreateRequest::new("a", Lifespan::Session).metadata(metadata(json!({"y": 2}))))
        .await
        .unwrap();

    assert_eq!(second.record.created_at, first.record.created_at);
    assert!(second.record.last_used_at > first.record.last_used_at);
    assert_eq!(second.record.turn_count, 0);
    assert_eq!(serde_json::Value::Object(second.record.metadata), json!({"x": 1, "y": 2}));
}

#[tokio::test]
async fn create_applies_defaults() {
    let ctx = setup();
    let record = create(&ctx, "a", Lifespan::Turn).await;

    assert_eq!(record.model, Model::Haiku);
    assert_eq!(record.turn_count, 0);
    assert_eq!(record.scope, SESSION);
    assert_eq!(record.created_at, ctx.clock.now());
    assert_eq!(record.last_used_at, record.created_at);
}

#[tokio::test]
async fn create_honours_requested_model() {
    let ctx = setup();
    let created =
        ctx.registry.create(CreateRequest::new("a", Lifespan::Turn).model(Model::Opus)).await;
    assert_eq!(created.unwrap().record.model, Model::Opus);
}

#[yare::parameterized(
    ephemeral = { Lifespan::Ephemeral, "ephemeral" },
    turn      = { Lifespan::Turn,      SESSION },
    context   = { Lifespan::Context,   SESSION },
    session   = { Lifespan::Session,   SESSION },
    project   = { Lifespan::Project,   CWD },
)]
fn create_resolves_default_scope(lifespan: Lifespan, expected: &str) {
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    rt.block_on(async {
        let ctx = setup();
        assert_eq!(create(&ctx, "a", lifespan).await.scope, expected);
    });
}

#[tokio::test]
async fn workflow_records_carry_workflow_id_metadata() {
    let ctx = setup();
    let record = create_in(&ctx, "builder", Lifespan::Workflow, "wf-9").await;
    assert_eq!(record.scope, "wf-9");
    assert_eq!(record.metadata.get(WORKFLOW_ID_KEY), Some(&json!("wf-9")));
    assert!(ctx.dir.path().join("workflow/wf-9/builder.json").exists());
}

#[yare::parameterized(
    empty_name       = { CreateRequest::new("", Lifespan::Turn),          ValidationError::EmptyName },
    blank_name       = { CreateRequest::new("   ", Lifespan::Session),     ValidationError::EmptyName },
    missing_workflow = { CreateRequest::new("a", Lifespan::Workflow),      ValidationError::MissingWorkflowId },
    empty_workflow   = { CreateRequest::new("a", Lifespan::Workflow).workflow_id(""), ValidationError::MissingWorkflowId },
)]
fn create_rejects_invalid_requests(request: CreateRequest, expected: ValidationError) {
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    rt.block_on(async {
        let ctx = setup();
        match ctx.registry.create(request).await {
            Err(RegistryError::Validation(e)) => assert_eq!(e, expected),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(ctx.observer.events().is_empty());
        assert!(!ctx.dir.path().join("session").exists());
        assert!(!ctx.dir.path().join("workflow").exists());
    });
}

#[test]
fn unknown_lifespan_is_a_validation_failure() {
    let err = CreateRequest::parse("a", "forever").unwrap_err();
    assert!(matches!(err, ValidationError::UnknownLifespan(_)));
    assert!(err.to_string().contains("forever"));
    assert_eq!(CreateRequest::parse("a", "turn").unwrap().lifespan, Lifespan::Turn);
}

#[tokio::test]
async fn same_name_in_different_scopes_are_distinct() {
    let ctx = setup();
    let a = create_in(&ctx, "a", Lifespan::Session, "s1").await;
    let b = create_in(&ctx, "a", Lifespan::Session, "s2").await;
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn same_name_and_scope_in_different_tiers_are_distinct() {
    let ctx = setup();
    let volatile = create(&ctx, "a", Lifespan::Turn).await;
    let durable = create(&ctx, "a", Lifespan::Session).await;
    assert_ne!(volatile.id, durable.id);
    assert_eq!(volatile.scope, durable.scope);
}

#[tokio::test]
async fn volatile_lifespans_share_one_tier_namespace() {
    let ctx = setup();
    let turn = ctx.registry.create(CreateRequest::new("a", Lifespan::Turn)).await.unwrap();
    let context = ctx.registry.create(CreateRequest::new("a", Lifespan::Context)).await.unwrap();

    assert!(!context.is_new);
    assert_eq!(context.record.id, turn.record.id);
    assert_eq!(context.record.lifespan, Lifespan::Turn);

    // The record is still a turn record, so the turn boundary takes it.
    assert_eq!(ctx.registry.dispose_by_lifespan(Lifespan::Turn).await.unwrap(), 1);
    assert_eq!(ctx.registry.get(&context.record.id).await.unwrap(), None);
    assert!(names(&ctx, &RecordFilter::by_lifespan(Lifespan::Context)).await.is_empty());
}

#[tokio::test]
async fn unsafe_durable_keys_are_validation_failures() {
    let ctx = setup();
    let cases = [
        (CreateRequest::new("a/b", Lifespan::Session), "name", "a/b"),
        (CreateRequest::new("..", Lifespan::Project), "name", ".."),
        (CreateRequest::new("a", Lifespan::Session).scope("../up"), "scope", "../up"),
        (CreateRequest::new("a", Lifespan::Workflow).workflow_id("wf/1"), "scope", "wf/1"),
    ];
    for (request, kind, value) in cases {
        match ctx.registry.create(request).await {
            Err(RegistryError::Validation(e)) => {
                assert_eq!(e, ValidationError::UnsafeKey { kind, value: value.to_string() })
            }
            other => panic!("expected validation failure for {value}, got {other:?}"),
        }
    }
    assert!(ctx.observer.events().is_empty());
    assert!(!ctx.dir.path().join("session").exists());
    assert!(!ctx.dir.path().join("workflow").exists());
    assert!(!ctx.dir.path().join("project").exists());
}

#[tokio::test]
async fn volatile_names_are_not_path_checked() {
    let ctx = setup();
    let record = create(&ctx, "a/b", Lifespan::Turn).await;
    assert_eq!(record.name, "a/b");
}

#[tokio::test]
async fn tier_isolation() {
    let ctx = setup();
    for lifespan in Lifespan::ALL {
        let record = create_in(&ctx, lifespan.as_str(), lifespan, "shared").await;
        let owner = lifespan.backend();
        for backend in Backend::ALL {
            let listed = ctx.registry.store(backend).list(&RecordFilter::all()).await.unwrap();
            let present = listed.iter().any(|r| r.id == record.id);
            assert_eq!(present, backend == owner, "{lifespan} in {backend}");
        }
    }
}

#[tokio::test]
async fn create_notifies_created_then_resumed() {
    let ctx = setup();
    create(&ctx, "a", Lifespan::Session).await;
    create(&ctx, "a", Lifespan::Session).await;
    assert_eq!(ctx.observer.kinds(), ["record_created", "record_resumed"]);

    let notifications = ctx.observer.notifications();
    let record = notifications[0].event.record().unwrap();
    assert_eq!(record.name, "a");
    assert_eq!(record.lifespan, Lifespan::Session);
    assert_eq!(record.scope, SESSION);
    assert_eq!(notifications[0].at, ctx.clock.now());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_produce_one_record() {
    let ctx = Arc::new(setup());
    let mut tasks = Vec::new();
    for _ in 0..16 {
        let ctx = Arc::clone(&ctx);
        tasks.push(tokio::spawn(async move {
            ctx.registry.create(CreateRequest::new("racer", Lifespan::Session)).await.unwrap()
        }));
    }

    let mut created = Vec::new();
    for task in tasks {
        created.push(task.await.unwrap());
    }

    assert_eq!(created.iter().filter(|c| c.is_new).count(), 1);
    let id = &created[0].record.id;
    assert!(created.iter().all(|c| c.record.id == *id));
    assert_eq!(ctx.registry.list(&RecordFilter::all()).await.unwrap().len(), 1);
    assert_eq!(ctx.registry.locks.len(), 0);
}

#[tokio::test]
async fn durable_records_visible_to_a_second_registry() {
    let ctx = setup();
    let record = create(&ctx, "keeper", Lifespan::Project).await;

    let other = Registry::new(
        RegistryConfig::new(ctx.dir.path()).ambient(AmbientScope::new(CWD)),
    )
    .unwrap();
    let again = other.create(CreateRequest::new("keeper", Lifespan::Project)).await.unwrap();
    assert!(!again.is_new);
    assert_eq!(again.record.id, record.id);
}
