// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeDelta;
use serde_json::json;

fn meta(value: serde_json::Value) -> Metadata {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn new_record_starts_unused() {
    let now = crate::test_support::fake_now();
    let record = AgentRecord::new("planner", Lifespan::Turn, "sess-1", Model::Sonnet, Metadata::new(), now);

    assert!(record.id.as_str().starts_with(RecordId::PREFIX));
    assert_eq!(record.turn_count, 0);
    assert_eq!(record.created_at, now);
    assert_eq!(record.last_used_at, now);
    assert_eq!(record.tier(), Tier::Volatile);
}

#[test]
fn new_records_get_distinct_ids() {
    let now = crate::test_support::fake_now();
    let a = AgentRecord::new("a", Lifespan::Turn, "s", Model::Haiku, Metadata::new(), now);
    let b = AgentRecord::new("a", Lifespan::Turn, "s", Model::Haiku, Metadata::new(), now);
    assert_ne!(a.id, b.id);
}

#[test]
fn serializes_with_camel_case_fields_and_iso_timestamps() {
    let record = AgentRecord::builder()
        .id("agt-123")
        .name("reviewer")
        .scope("sess-9")
        .turn_count(3)
        .metadata(meta(json!({"role": "review"})))
        .build();

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "agt-123",
            "name": "reviewer",
            "lifespan": "session",
            "scope": "sess-9",
            "model": "haiku",
            "createdAt": "2026-01-01T00:00:00Z",
            "lastUsedAt": "2026-01-01T00:00:00Z",
            "turnCount": 3,
            "metadata": {"role": "review"}
        })
    );
}

#[test]
fn nested_metadata_round_trips_in_order() {
    let record = AgentRecord::builder()
        .metadata(meta(json!({
            "zeta": 1,
            "alpha": {"nested": [1, 2, {"deep": null}], "flag": true},
            "middle": "text with \"quotes\" and ünïcode"
        })))
        .build();

    let text = serde_json::to_string_pretty(&record).unwrap();
    let restored: AgentRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, record);

    let keys: Vec<_> = restored.metadata.keys().cloned().collect();
    assert_eq!(keys, ["zeta", "alpha", "middle"]);
    assert_eq!(serde_json::to_string_pretty(&restored).unwrap(), text);
}

#[test]
fn missing_optional_fields_take_defaults() {
    let record: AgentRecord = serde_json::from_value(json!({
        "id": "agt-1",
        "name": "n",
        "lifespan": "project",
        "scope": "/repo",
        "createdAt": "2026-01-01T00:00:00Z",
        "lastUsedAt": "2026-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(record.model, Model::Haiku);
    assert_eq!(record.turn_count, 0);
    assert!(record.metadata.is_empty());
}

#[test]
fn touch_never_moves_backwards() {
    let mut record = AgentRecord::builder().build();
    let start = record.last_used_at;

    record.touch(start + TimeDelta::seconds(10));
    assert_eq!(record.last_used_at, start + TimeDelta::seconds(10));

    record.touch(start - TimeDelta::seconds(100));
    assert_eq!(record.last_used_at, start + TimeDelta::seconds(10));
}

#[test]
fn record_turn_increments_and_touches() {
    let mut record = AgentRecord::builder().turn_count(4).build();
    let later = record.last_used_at + TimeDelta::seconds(1);
    record.record_turn(later);
    assert_eq!(record.turn_count, 5);
    assert_eq!(record.last_used_at, later);
}

#[test]
fn merge_metadata_overwrites_and_extends() {
    let mut record = AgentRecord::builder().metadata(meta(json!({"a": 1, "b": 2}))).build();
    record.merge_metadata(&meta(json!({"b": 3, "c": 4})));
    assert_eq!(serde_json::Value::Object(record.metadata), json!({"a": 1, "b": 3, "c": 4}));
}

#[yare::parameterized(
    workflow = { Lifespan::Workflow, Some("wf-1") },
    session  = { Lifespan::Session,  None },
    turn     = { Lifespan::Turn,     None },
)]
fn workflow_id_only_for_workflow_records(lifespan: Lifespan, expected: Option<&str>) {
    let record = AgentRecord::builder().lifespan(lifespan).scope("wf-1").build();
    assert_eq!(record.workflow_id(), expected);
}
