// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The agent record: the one entity the registry persists.
//!
//! Records are keyed by [`RecordId`] globally and by `(name, scope)` within
//! the tier their [`Lifespan`] maps to. On disk each record is a single
//! camelCase JSON document with ISO-8601 timestamps.

use crate::lifespan::{Lifespan, Model, Tier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Globally unique record identifier, assigned once at creation.
    pub struct RecordId("agt-");
}

/// Opaque caller metadata. Key order is preserved through persistence.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Metadata key injected into every workflow-lifespan record.
pub const WORKFLOW_ID_KEY: &str = "workflowId";

/// A named, scoped agent tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub id: RecordId,
    /// Unique only within `(tier, scope)`
    pub name: String,
    pub lifespan: Lifespan,
    pub scope: String,
    #[serde(default)]
    pub model: Model,
    pub created_at: DateTime<Utc>,
    /// Never earlier than `created_at`
    pub last_used_at: DateTime<Utc>,
    /// Number of resumes; only ever grows
    #[serde(default)]
    pub turn_count: u64,
    #[serde(default)]
    pub metadata: Metadata,
}

impl AgentRecord {
    /// Build a fresh record with a newly allocated id.
    pub fn new(
        name: impl Into<String>,
        lifespan: Lifespan,
        scope: impl Into<String>,
        model: Model,
        metadata: Metadata,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            lifespan,
            scope: scope.into(),
            model,
            created_at: now,
            last_used_at: now,
            turn_count: 0,
            metadata,
        }
    }

    pub fn tier(&self) -> Tier {
        self.lifespan.tier()
    }

    /// Mark the record as used at `now`. A clock that moved backwards
    /// leaves `last_used_at` where it was.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_used_at = self.last_used_at.max(now).max(self.created_at);
    }

    /// Resume the record: touch it and count one more turn.
    pub fn record_turn(&mut self, now: DateTime<Utc>) {
        self.touch(now);
        self.turn_count = self.turn_count.saturating_add(1);
    }

    /// Overlay `patch` onto the record's metadata, key by key.
    pub fn merge_metadata(&mut self, patch: &Metadata) {
        for (key, value) in patch {
            self.metadata.insert(key.clone(), value.clone());
        }
    }

    /// The workflow this record belongs to, if any.
    pub fn workflow_id(&self) -> Option<&str> {
        match self.lifespan {
            Lifespan::Workflow => Some(&self.scope),
            _ => None,
        }
    }
}

crate::builder! {
    pub struct AgentRecordBuilder => AgentRecord {
        into {
            id: RecordId = "agt-test",
            name: String = "worker",
            scope: String = "sess-1",
        }
        set {
            lifespan: Lifespan = Lifespan::Session,
            model: Model = Model::Haiku,
            created_at: DateTime<Utc> = crate::test_support::fake_now(),
            last_used_at: DateTime<Utc> = crate::test_support::fake_now(),
            turn_count: u64 = 0,
            metadata: Metadata = Metadata::new(),
        }
    }
}

#[cfg(test)]
#[path = "agent_record_tests.rs"]
mod tests;
