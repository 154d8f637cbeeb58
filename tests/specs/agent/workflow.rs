//! `roster workflow` specs

use crate::prelude::*;

#[test]
fn complete_disposes_only_that_workflow() {
    let temp = Project::empty();
    temp.roster().args(&["workflow", "start", "F1", "a"]).passes().stdout_has("Started agent 'a'");
    temp.roster().args(&["workflow", "start", "F1", "b"]).passes();
    temp.roster().args(&["workflow", "start", "F2", "a"]).passes();

    let out = temp.roster().args(&["-o", "json", "workflow", "complete", "F1"]).passes().json();
    assert_eq!(out["count"], 2);

    let agents = temp.roster().args(&["-o", "json", "workflow", "agents", "F2"]).passes().json();
    assert_eq!(agents.as_array().unwrap().len(), 1);
    temp.roster().args(&["workflow", "agents", "F1"]).passes().stdout_has("No agents");
}

#[test]
fn start_rejoins_existing_agent() {
    let temp = Project::empty();
    let first = temp.roster().args(&["-o", "json", "workflow", "start", "F1", "a"]).passes().json();
    temp.roster().args(&["workflow", "start", "F1", "a"]).passes().stdout_has("Rejoined agent 'a'");

    let record = &first["record"];
    assert_eq!(record["lifespan"], "workflow");
    assert_eq!(record["scope"], "F1");
    assert_eq!(record["metadata"]["workflowId"], "F1");
}

#[test]
fn start_with_model_and_metadata() {
    let temp = Project::empty();
    let out = temp
        .roster()
        .args(&["-o", "json", "workflow", "start", "F1", "a", "-m", "sonnet", "--meta", "step:=3"])
        .passes()
        .json();
    assert_eq!(out["record"]["model"], "sonnet");
    assert_eq!(out["record"]["metadata"]["step"], 3);
}

#[test]
fn workflow_documents_land_under_the_workflow_dir() {
    let temp = Project::empty();
    temp.roster().args(&["workflow", "start", "F1", "a"]).passes();
    assert!(temp.state_dir().join("workflow/F1/a.json").is_file());

    temp.roster().args(&["workflow", "complete", "F1"]).passes();
    assert!(!temp.state_dir().join("workflow/F1").exists());
}
