//! Host boundary hook specs

use crate::prelude::*;

#[test]
fn turn_end_disposes_turn_agents_only() {
    let temp = Project::empty();
    // Volatile agents live only for one process, so seed durable ones and
    // check the hook leaves them alone.
    temp.create(&["s", "-l", "session"]);
    temp.create(&["p", "-l", "project"]);

    let out = temp.roster().args(&["-o", "json", "hook", "turn-end"]).passes().json();
    assert_eq!(out["count"], 0);
    assert_eq!(temp.names(&[]), ["p", "s"]);
}

#[test]
fn session_end_uses_ambient_session() {
    let temp = Project::empty();
    temp.create(&["mine", "-l", "session"]);
    temp.create(&["theirs", "-l", "session", "--session", "other"]);

    temp.roster()
        .args(&["hook", "session-end"])
        .passes()
        .stdout_has(&format!("Disposed 1 agent from session {SESSION}"));
    assert_eq!(temp.names(&[]), ["theirs"]);
}

#[test]
fn session_end_with_explicit_session() {
    let temp = Project::empty();
    temp.create(&["mine", "-l", "session"]);
    temp.create(&["theirs", "-l", "session", "--session", "other"]);

    temp.roster().args(&["hook", "session-end", "--session", "other"]).passes();
    assert_eq!(temp.names(&[]), ["mine"]);
}

#[test]
fn session_end_without_any_session_is_rejected() {
    let temp = Project::empty();
    temp.roster_without_session()
        .args(&["hook", "session-end"])
        .exits(EXIT_INVALID)
        .stderr_has("--session");
}
