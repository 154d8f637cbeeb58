// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::agent_record::{AgentRecord, Metadata};
use crate::clock::{Clock, FakeClock};
use crate::lifespan::Lifespan;
use chrono::{DateTime, Utc};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for records and filters.
///
/// Names and scopes are drawn from tiny alphabets so that generated filters
/// hit generated records often enough to be interesting.
pub mod strategies {
    use crate::agent_record::{AgentRecord, Metadata};
    use crate::filter::RecordFilter;
    use crate::lifespan::{Lifespan, Model};
    use proptest::prelude::*;

    pub fn arb_lifespan() -> impl Strategy<Value = Lifespan> {
        proptest::sample::select(Lifespan::ALL.to_vec())
    }

    pub fn arb_model() -> impl Strategy<Value = Model> {
        prop_oneof![Just(Model::Haiku), Just(Model::Sonnet), Just(Model::Opus)]
    }

    pub fn arb_metadata() -> impl Strategy<Value = Metadata> {
        proptest::collection::vec(("[a-z]{1,6}", any::<i64>()), 0..4).prop_map(|pairs| {
            pairs.into_iter().map(|(k, v)| (k, serde_json::Value::from(v))).collect()
        })
    }

    pub fn arb_record() -> impl Strategy<Value = AgentRecord> {
        ("[a-c]{1,2}", arb_lifespan(), "[a-c]{1,2}", arb_model(), 0u64..50, arb_metadata())
            .prop_map(|(name, lifespan, scope, model, turn_count, metadata)| {
                let mut record =
                    AgentRecord::new(name, lifespan, scope, model, metadata, super::fake_now());
                record.turn_count = turn_count;
                record
            })
    }

    pub fn arb_filter() -> impl Strategy<Value = RecordFilter> {
        (
            proptest::option::of(arb_lifespan()),
            proptest::option::of("[a-c]{1,2}"),
            proptest::option::of("[a-c]{1,2}"),
        )
            .prop_map(|(lifespan, scope, name)| RecordFilter { lifespan, scope, name })
    }
}

// ── Record factories ─────────────────────────────────────────────────────

/// The instant every [`FakeClock`] starts at.
pub fn fake_now() -> DateTime<Utc> {
    FakeClock::new().now()
}

/// A fresh record with a random id, created at [`fake_now`].
pub fn record(name: &str, lifespan: Lifespan, scope: &str) -> AgentRecord {
    AgentRecord::new(name, lifespan, scope, Default::default(), Metadata::new(), fake_now())
}

/// Build metadata from a JSON object literal; non-objects yield empty metadata.
pub fn metadata(value: serde_json::Value) -> Metadata {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Metadata::new(),
    }
}
