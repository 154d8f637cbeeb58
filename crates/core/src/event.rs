// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle notifications emitted by the registry.
//!
//! Notifications are facts about what already happened. Sinks receive them
//! fire-and-forget; nothing in the registry depends on a sink being present.

use crate::agent_record::{AgentRecord, Metadata, RecordId};
use crate::lifespan::Lifespan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The identifying fields of a record, as carried by record events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRef {
    pub id: RecordId,
    pub name: String,
    pub lifespan: Lifespan,
    pub scope: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl From<&AgentRecord> for RecordRef {
    fn from(record: &AgentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            lifespan: record.lifespan,
            scope: record.scope.clone(),
            metadata: record.metadata.clone(),
        }
    }
}

/// What a bulk cleanup was keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum CleanupTarget {
    Lifespan(Lifespan),
    Scope(String),
}

impl std::fmt::Display for CleanupTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupTarget::Lifespan(l) => write!(f, "lifespan:{}", l),
            CleanupTarget::Scope(s) => write!(f, "scope:{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    RecordCreated {
        record: RecordRef,
    },
    /// Emitted both by resume and by a create that found an existing record
    RecordResumed {
        record: RecordRef,
    },
    RecordDisposed {
        record: RecordRef,
    },
    WorkflowStarted {
        workflow_id: String,
        record: RecordRef,
    },
    WorkflowCompleted {
        workflow_id: String,
        count: usize,
    },
    BulkCleanup {
        target: CleanupTarget,
        count: usize,
    },
    /// Persisted documents that could not be parsed during a listing
    CorruptEntriesSkipped {
        count: usize,
    },
}

impl RegistryEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryEvent::RecordCreated { .. } => "record_created",
            RegistryEvent::RecordResumed { .. } => "record_resumed",
            RegistryEvent::RecordDisposed { .. } => "record_disposed",
            RegistryEvent::WorkflowStarted { .. } => "workflow_started",
            RegistryEvent::WorkflowCompleted { .. } => "workflow_completed",
            RegistryEvent::BulkCleanup { .. } => "bulk_cleanup",
            RegistryEvent::CorruptEntriesSkipped { .. } => "corrupt_entries_skipped",
        }
    }

    pub fn record(&self) -> Option<&RecordRef> {
        match self {
            RegistryEvent::RecordCreated { record }
            | RegistryEvent::RecordResumed { record }
            | RegistryEvent::RecordDisposed { record }
            | RegistryEvent::WorkflowStarted { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn count(&self) -> Option<usize> {
        match self {
            RegistryEvent::WorkflowCompleted { count, .. }
            | RegistryEvent::BulkCleanup { count, .. }
            | RegistryEvent::CorruptEntriesSkipped { count } => Some(*count),
            _ => None,
        }
    }
}

/// A timestamped event, the unit delivered to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: RegistryEvent,
}

impl Notification {
    pub fn new(at: DateTime<Utc>, event: RegistryEvent) -> Self {
        Self { at, event }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
