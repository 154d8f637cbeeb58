// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use roster_core::Model;

#[tokio::test]
async fn complete_workflow_disposes_only_that_workflow() {
    let ctx = setup();
    create_in(&ctx, "a", Lifespan::Workflow, "F1").await;
    create_in(&ctx, "b", Lifespan::Workflow, "F1").await;
    create_in(&ctx, "a", Lifespan::Workflow, "F2").await;

    assert_eq!(ctx.registry.complete_workflow("F1").await.unwrap(), 2);
    assert!(ctx.registry.workflow_agents("F1").await.unwrap().is_empty());
    assert_eq!(ctx.registry.workflow_agents("F2").await.unwrap().len(), 1);
    assert!(!ctx.dir.path().join("workflow/F1").exists());
}

#[tokio::test]
async fn complete_workflow_leaves_other_lifespans_sharing_the_scope() {
    let ctx = setup();
    create_in(&ctx, "a", Lifespan::Workflow, "F1").await;
    create_in(&ctx, "s", Lifespan::Session, "F1").await;

    assert_eq!(ctx.registry.complete_workflow("F1").await.unwrap(), 1);
    assert_eq!(names(&ctx, &RecordFilter::all()).await, ["s"]);
}

#[tokio::test]
async fn complete_unknown_workflow_is_zero() {
    let ctx = setup();
    assert_eq!(ctx.registry.complete_workflow("nope").await.unwrap(), 0);
    assert_eq!(
        ctx.observer.events(),
        [RegistryEvent::WorkflowCompleted { workflow_id: "nope".into(), count: 0 }]
    );
}

#[tokio::test]
async fn start_workflow_is_find_or_create() {
    let ctx = setup();
    let start = StartWorkflow::new("wf-1", "planner").model(Model::Sonnet);
    let first = ctx.registry.start_workflow(start.clone()).await.unwrap();
    let second = ctx.registry.start_workflow(start).await.unwrap();

    assert!(first.is_new);
    assert!(!second.is_new);
    assert_eq!(first.record.id, second.record.id);
    assert_eq!(first.record.lifespan, Lifespan::Workflow);
    assert_eq!(first.record.model, Model::Sonnet);
    assert_eq!(first.record.workflow_id(), Some("wf-1"));
}

#[tokio::test]
async fn start_workflow_announces_only_new_records() {
    let ctx = setup();
    let start = StartWorkflow::new("wf-1", "planner");
    ctx.registry.start_workflow(start.clone()).await.unwrap();
    ctx.registry.start_workflow(start).await.unwrap();

    assert_eq!(ctx.observer.kinds(), ["record_created", "workflow_started", "record_resumed"]);
}

#[tokio::test]
async fn start_workflow_requires_an_id() {
    let ctx = setup();
    let err = ctx.registry.start_workflow(StartWorkflow::new("", "planner")).await.unwrap_err();
    assert!(matches!(err, RegistryError::Validation(ValidationError::MissingWorkflowId)));
}
