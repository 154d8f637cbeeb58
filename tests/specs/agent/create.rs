//! `roster create` specs

use crate::prelude::*;

#[test]
fn create_is_idempotent_per_tier_and_scope() {
    let temp = Project::empty();
    let first = temp.roster().args(&["-o", "json", "create", "a", "-l", "session"]).passes().json();
    let second = temp.roster().args(&["-o", "json", "create", "a", "-l", "session"]).passes().json();

    assert_eq!(first["isNew"], true);
    assert_eq!(second["isNew"], false);
    assert_eq!(first["record"]["id"], second["record"]["id"]);
    temp.roster()
        .args(&["create", "a", "-l", "session"])
        .passes()
        .stdout_has("Reused agent 'a'");
}

#[test]
fn create_with_model_and_metadata() {
    let temp = Project::empty();
    let record = temp.create(&["a", "-l", "project", "-m", "opus", "--meta", "task=review", "--meta", "n:=2"]);
    assert_eq!(record["model"], "opus");
    assert_eq!(record["metadata"], serde_json::json!({"task": "review", "n": 2}));
    assert_eq!(record["scope"], temp.work_dir().display().to_string());
}

#[test]
fn plain_metadata_values_keep_their_text() {
    let temp = Project::empty();
    let record = temp.create(&["a", "-l", "session", "--meta", "version=1.10"]);
    assert_eq!(record["metadata"]["version"], "1.10");
}

#[test]
fn explicit_scope_and_session() {
    let temp = Project::empty();
    assert_eq!(temp.create(&["a", "-l", "turn", "--scope", "t-1"])["scope"], "t-1");
    assert_eq!(temp.create(&["a", "-l", "session", "--session", "other"])["scope"], "other");
    assert_eq!(temp.create(&["a", "-l", "project", "--project", "/srv/app"])["scope"], "/srv/app");
}

#[test]
fn missing_session_falls_back() {
    let temp = Project::empty();
    let out = temp
        .roster_without_session()
        .args(&["-o", "json", "create", "a", "-l", "context"])
        .passes()
        .json();
    assert_eq!(out["record"]["scope"], "unknown-context");
}

#[test]
fn claude_session_id_is_a_fallback_source() {
    let temp = Project::empty();
    let out = temp
        .roster_without_session()
        .env("CLAUDE_SESSION_ID", "from-host")
        .args(&["-o", "json", "create", "a", "-l", "session"])
        .passes()
        .json();
    assert_eq!(out["record"]["scope"], "from-host");
}

#[test]
fn unknown_lifespan_is_rejected() {
    let temp = Project::empty();
    temp.roster()
        .args(&["create", "a", "-l", "forever"])
        .exits(EXIT_INVALID)
        .stderr_has("forever");
}

#[test]
fn unknown_model_is_rejected() {
    let temp = Project::empty();
    temp.roster().args(&["create", "a", "-l", "turn", "-m", "gpt"]).exits(EXIT_INVALID);
}

#[test]
fn empty_name_is_rejected_before_storage() {
    let temp = Project::empty();
    temp.roster().args(&["create", "", "-l", "session"]).exits(EXIT_INVALID);
    assert!(!temp.state_dir().join("session").exists());
}

#[test]
fn workflow_lifespan_needs_workflow_id() {
    let temp = Project::empty();
    temp.roster()
        .args(&["create", "a", "-l", "workflow"])
        .exits(EXIT_INVALID)
        .stderr_has("workflow id");
}

#[test]
fn unsafe_names_are_rejected_for_durable_tiers() {
    let temp = Project::empty();
    temp.roster().args(&["create", "../escape", "-l", "session"]).exits(EXIT_INVALID);
    temp.roster().args(&["create", "a", "-l", "session", "--session", ".."]).exits(EXIT_INVALID);
}

#[test]
fn malformed_metadata_is_rejected() {
    let temp = Project::empty();
    temp.roster().args(&["create", "a", "-l", "turn", "--meta", "oops"]).exits(EXIT_INVALID);
}
