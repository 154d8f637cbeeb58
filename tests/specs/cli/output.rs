//! Output format and diagnostics specs

use crate::prelude::*;

#[test]
fn text_output_is_the_default() {
    let temp = Project::empty();
    temp.roster()
        .args(&["create", "scout", "--lifespan", "turn"])
        .passes()
        .stdout_has("Created agent 'scout'")
        .stdout_has(&format!("[turn:{SESSION}]"));
}

#[test]
fn json_output_uses_camel_case() {
    let temp = Project::empty();
    let out = temp.roster().args(&["-o", "json", "create", "scout", "-l", "session"]).passes().json();
    assert_eq!(out["isNew"], true);
    let record = &out["record"];
    assert!(record["id"].as_str().unwrap().starts_with("agt-"));
    assert_eq!(record["lifespan"], "session");
    assert_eq!(record["scope"], SESSION);
    assert_eq!(record["model"], "haiku");
    assert_eq!(record["turnCount"], 0);
    assert_eq!(record["createdAt"], record["lastUsedAt"]);
}

#[test]
fn logs_go_to_stderr() {
    let temp = Project::empty();
    let out = temp
        .roster()
        .env("ROSTER_LOG", "info")
        .args(&["-o", "json", "create", "scout", "-l", "session"])
        .passes();
    assert!(out.stderr().contains("record_created"), "stderr:\n{}", out.stderr());
    out.json();
}

#[test]
fn empty_list_in_text() {
    let temp = Project::empty();
    temp.roster().args(&["list"]).passes().stdout_has("No agents");
}

#[test]
fn stats_in_text_and_json() {
    let temp = Project::empty();
    temp.create(&["a", "-l", "turn"]);
    temp.create(&["b", "-l", "project"]);

    temp.roster().args(&["stats"]).passes().stdout_has("total").stdout_has("turn");
    let stats = temp.roster().args(&["-o", "json", "stats"]).passes().json();
    similar_asserts::assert_eq!(
        stats,
        serde_json::json!({
            "ephemeral": 0, "turn": 1, "context": 0,
            "session": 0, "workflow": 0, "project": 1
        })
    );
}
