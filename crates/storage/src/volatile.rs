// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process store for ephemeral, turn, and context records.
//!
//! Nothing here survives the process; that is the contract of the
//! volatile lifespans.

use async_trait::async_trait;
use parking_lot::Mutex;
use roster_core::{AgentRecord, Backend, RecordFilter, RecordId};
use std::collections::HashMap;

use crate::{RecordStore, Scan, StorageError};

type NameScope = (String, String);

#[derive(Default)]
struct Indices {
    /// Primary index
    by_id: HashMap<RecordId, AgentRecord>,
    /// Secondary index: (name, scope) -> id
    by_key: HashMap<NameScope, RecordId>,
}

impl Indices {
    fn insert(&mut self, record: AgentRecord) {
        let key = (record.name.clone(), record.scope.clone());
        if let Some(prev) = self.by_id.get(&record.id) {
            let prev_key = (prev.name.clone(), prev.scope.clone());
            if prev_key != key {
                self.unlink(&prev_key, &record.id);
            }
        }
        self.by_key.insert(key, record.id.clone());
        self.by_id.insert(record.id.clone(), record);
    }

    fn remove(&mut self, id: &RecordId) -> Option<AgentRecord> {
        let record = self.by_id.remove(id)?;
        self.unlink(&(record.name.clone(), record.scope.clone()), id);
        Some(record)
    }

    /// Drop a secondary entry only if it still points at `id`; a later
    /// record saved under the same key owns it otherwise.
    fn unlink(&mut self, key: &NameScope, id: &RecordId) {
        if self.by_key.get(key) == Some(id) {
            self.by_key.remove(key);
        }
    }
}

/// Two-index in-memory record table.
#[derive(Default)]
pub struct VolatileStore {
    inner: Mutex<Indices>,
}

impl VolatileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for VolatileStore {
    fn backend(&self) -> Backend {
        Backend::Volatile
    }

    async fn save(&self, record: &AgentRecord) -> Result<(), StorageError> {
        self.inner.lock().insert(record.clone());
        tracing::debug!(id = %record.id, name = %record.name, scope = %record.scope, "saved volatile record");
        Ok(())
    }

    async fn load_by_id(&self, id: &RecordId) -> Result<Option<AgentRecord>, StorageError> {
        Ok(self.inner.lock().by_id.get(id).cloned())
    }

    async fn find_by_name_and_scope(
        &self,
        name: &str,
        scope: &str,
    ) -> Result<Option<AgentRecord>, StorageError> {
        let inner = self.inner.lock();
        let key = (name.to_string(), scope.to_string());
        Ok(inner.by_key.get(&key).and_then(|id| inner.by_id.get(id)).cloned())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StorageError> {
        if self.inner.lock().remove(id).is_some() {
            tracing::debug!(%id, "deleted volatile record");
        }
        Ok(())
    }

    async fn delete_many(&self, filter: &RecordFilter) -> Result<usize, StorageError> {
        let mut inner = self.inner.lock();
        let doomed: Vec<RecordId> = inner
            .by_id
            .values()
            .filter(|r| filter.matches(r))
            .map(|r| r.id.clone())
            .collect();
        for id in &doomed {
            inner.remove(id);
        }
        tracing::debug!(count = doomed.len(), ?filter, "deleted volatile records");
        Ok(doomed.len())
    }

    async fn scan(&self, filter: &RecordFilter) -> Result<Scan, StorageError> {
        let records =
            self.inner.lock().by_id.values().filter(|r| filter.matches(r)).cloned().collect();
        Ok(Scan { records, skipped: 0 })
    }
}

#[cfg(test)]
#[path = "volatile_tests.rs"]
mod tests;
