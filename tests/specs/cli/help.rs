//! CLI help output specs

use crate::prelude::*;

#[test]
fn roster_binary_is_found_from_the_spec_build() {
    let bin = roster_bin();
    assert!(bin.is_file(), "{}", bin.display());
    cli().args(&["--version"]).passes().stdout_has("roster");
}

#[test]
fn roster_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("create");
}

#[test]
fn roster_no_args_shows_usage_and_fails() {
    cli().exits(EXIT_INVALID).stderr_has("Usage:");
}

#[test]
fn workflow_help_shows_subcommands() {
    cli()
        .args(&["workflow", "--help"])
        .passes()
        .stdout_has("start")
        .stdout_has("complete")
        .stdout_has("agents");
}

#[test]
fn hook_help_shows_subcommands() {
    cli().args(&["hook", "--help"]).passes().stdout_has("turn-end").stdout_has("session-end");
}

#[test]
fn roster_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
