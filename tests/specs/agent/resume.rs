//! `roster resume` and `roster get` specs

use crate::prelude::*;

#[test]
fn resume_increments_turns_across_processes() {
    let temp = Project::empty();
    let created = temp.create(&["a", "-l", "session"]);

    let first = temp.roster().args(&["-o", "json", "resume", "a"]).passes().json();
    let second = temp.roster().args(&["-o", "json", "resume", "a"]).passes().json();

    assert_eq!(first["id"], created["id"]);
    assert_eq!(first["turnCount"], 1);
    assert_eq!(second["turnCount"], 2);
    let prior = first["lastUsedAt"].as_str().unwrap().to_string();
    let later = second["lastUsedAt"].as_str().unwrap().to_string();
    assert!(later >= prior, "{later} < {prior}");
}

#[test]
fn resume_text_reports_turn() {
    let temp = Project::empty();
    temp.create(&["a", "-l", "project"]);
    temp.roster().args(&["resume", "a"]).passes().stdout_has("Resumed agent 'a'").stdout_has("turn 1");
}

#[test]
fn resume_unknown_name_is_not_found() {
    let temp = Project::empty();
    temp.roster().args(&["resume", "ghost"]).exits(EXIT_NOT_FOUND).stderr_has("ghost");
}

#[test]
fn resume_workflow_agent_needs_scope() {
    let temp = Project::empty();
    temp.roster().args(&["workflow", "start", "wf-1", "builder"]).passes();

    temp.roster().args(&["resume", "builder"]).exits(EXIT_NOT_FOUND);
    temp.roster().args(&["resume", "builder", "--scope", "wf-1"]).passes();
}

#[test]
fn get_shows_record() {
    let temp = Project::empty();
    let created = temp.create(&["a", "-l", "session", "--meta", "task=triage"]);
    let id = created["id"].as_str().unwrap();

    temp.roster()
        .args(&["get", id])
        .passes()
        .stdout_has(id)
        .stdout_has("lifespan:  session")
        .stdout_has("task: \"triage\"");
    let fetched = temp.roster().args(&["-o", "json", "get", id]).passes().json();
    similar_asserts::assert_eq!(fetched, created);
}

#[test]
fn get_unknown_id_is_not_found() {
    let temp = Project::empty();
    temp.roster().args(&["get", "agt-missing"]).exits(EXIT_NOT_FOUND);
}
