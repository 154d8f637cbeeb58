// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::{HashMap, HashSet};

crate::define_id! {
    pub struct JobId("job-");
}

#[test]
fn fresh_ids_are_prefixed_and_inline_sized() {
    let id = JobId::new();
    assert!(id.as_str().starts_with("job-"));
    assert_eq!(id.as_str().len(), 23);
    assert_eq!(id.suffix().len(), super::RANDOM_LEN);
}

#[test]
fn fresh_ids_do_not_repeat() {
    let ids: HashSet<JobId> = (0..256).map(|_| JobId::new()).collect();
    assert_eq!(ids.len(), 256);
}

#[test]
fn lookup_by_plain_str() {
    let mut map = HashMap::new();
    map.insert(JobId::from("job-k"), 42);
    assert_eq!(map.get("job-k"), Some(&42));
}

#[test]
fn json_is_a_bare_string() {
    let id = JobId::from(String::from("job-abc"));
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"job-abc\"");
    assert_eq!(serde_json::from_str::<JobId>("\"job-abc\"").unwrap(), id);
}

#[yare::parameterized(
    prefixed = { "job-abc", "abc" },
    foreign  = { "agt-abc", "agt-abc" },
    bare     = { "abc",     "abc" },
)]
fn suffix_strips_only_own_prefix(raw: &str, expected: &str) {
    assert_eq!(JobId::from_string(raw).suffix(), expected);
}
