//! Disposal specs

use crate::prelude::*;

#[test]
fn dispose_by_id() {
    let temp = Project::empty();
    let created = temp.create(&["a", "-l", "session"]);
    let id = created["id"].as_str().unwrap();

    temp.roster().args(&["dispose", id]).passes().stdout_has("Disposed agent");
    temp.roster().args(&["get", id]).exits(EXIT_NOT_FOUND);
    temp.roster().args(&["dispose", id]).exits(EXIT_NOT_FOUND);
}

#[test]
fn dispose_scope_leaves_other_scopes() {
    let temp = Project::empty();
    temp.create(&["a", "-l", "session", "--session", "S1"]);
    temp.create(&["b", "-l", "session", "--session", "S2"]);

    let out = temp.roster().args(&["-o", "json", "dispose-scope", "S1"]).passes().json();
    assert_eq!(out["count"], 1);
    assert_eq!(temp.names(&[]), ["b"]);
}

#[test]
fn dispose_lifespan_counts_only_that_lifespan() {
    let temp = Project::empty();
    temp.create(&["a", "-l", "turn", "--scope", "t1"]);
    temp.create(&["b", "-l", "turn", "--scope", "t2"]);
    temp.create(&["c", "-l", "session"]);
    temp.create(&["d", "-l", "project"]);

    temp.roster()
        .args(&["dispose-lifespan", "session"])
        .passes()
        .stdout_has("Disposed 1 agent from lifespan session");
    assert_eq!(temp.names(&[]), ["d"]);
}

#[test]
fn dispose_lifespan_rejects_unknown_lifespan() {
    let temp = Project::empty();
    temp.roster().args(&["dispose-lifespan", "forever"]).exits(EXIT_INVALID);
}

#[test]
fn list_filters() {
    let temp = Project::empty();
    temp.create(&["s", "-l", "session"]);
    temp.create(&["o", "-l", "session", "--session", "other"]);
    temp.create(&["p", "-l", "project"]);

    assert_eq!(temp.names(&[]), ["o", "p", "s"]);
    assert_eq!(temp.names(&["-l", "session"]), ["o", "s"]);
    assert_eq!(temp.names(&["--scope", SESSION]), ["s"]);
    assert_eq!(temp.names(&["--name", "p"]), ["p"]);
    temp.roster().args(&["list", "-l", "session"]).passes().stdout_has("NAME").stdout_lacks(" p ");
}
