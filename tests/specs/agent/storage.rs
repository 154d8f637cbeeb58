//! On-disk layout and corruption tolerance specs

use crate::prelude::*;

#[test]
fn durable_documents_are_pretty_json() {
    let temp = Project::empty();
    temp.create(&["a", "-l", "session", "--meta", "nested:={\"k\":[1,2]}"]);

    let path = temp.state_dir().join("session").join(SESSION).join("a.json");
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("\n  \"name\": \"a\""), "{text}");
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["metadata"]["nested"]["k"][1], 2);
}

#[test]
fn project_documents_are_flat() {
    let temp = Project::empty();
    temp.create(&["keeper", "-l", "project"]);
    assert!(temp.state_dir().join("project/keeper.json").is_file());
}

#[test]
fn corrupt_documents_are_skipped_with_a_warning() {
    let temp = Project::empty();
    temp.create(&["good", "-l", "session"]);
    temp.state_file(&format!("session/{SESSION}/bad.json"), "{ truncated");
    temp.state_file(&format!("session/{SESSION}/notes.txt"), "not a record");

    let out = temp.roster().args(&["-o", "json", "list"]).passes();
    let names: Vec<_> =
        out.json().as_array().unwrap().iter().map(|r| r["name"].clone()).collect();
    assert_eq!(names, [serde_json::json!("good")]);
    assert!(out.stderr().contains("skipped"), "stderr:\n{}", out.stderr());
}

#[test]
fn corrupt_document_on_create_path_is_treated_as_absent() {
    let temp = Project::empty();
    temp.state_file(&format!("session/{SESSION}/a.json"), "garbage");
    let out = temp.roster().args(&["-o", "json", "create", "a", "-l", "session"]).passes().json();
    assert_eq!(out["isNew"], true);
}
