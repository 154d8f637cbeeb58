// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The storage contract shared by every backend.

use async_trait::async_trait;
use roster_core::{AgentRecord, Backend, RecordFilter, RecordId};

use crate::StorageError;

/// Result of a filtered scan.
#[derive(Debug, Default)]
pub struct Scan {
    pub records: Vec<AgentRecord>,
    /// Persisted documents that could not be parsed and were left out
    pub skipped: usize,
}

/// Uniform record storage.
///
/// Every implementation must behave identically as observed through these
/// methods: writes are visible to the caller's next read, lookups of absent
/// records are `Ok(None)`, and deleting an absent record is a no-op.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Which backend this store is, for routing and logs.
    fn backend(&self) -> Backend;

    /// Insert or overwrite by id. The record is findable by id and by
    /// `(name, scope)` once this returns.
    async fn save(&self, record: &AgentRecord) -> Result<(), StorageError>;

    async fn load_by_id(&self, id: &RecordId) -> Result<Option<AgentRecord>, StorageError>;

    /// Exact, case-sensitive lookup.
    async fn find_by_name_and_scope(
        &self,
        name: &str,
        scope: &str,
    ) -> Result<Option<AgentRecord>, StorageError>;

    async fn delete(&self, id: &RecordId) -> Result<(), StorageError>;

    /// Remove every matching record, returning how many were removed.
    async fn delete_many(&self, filter: &RecordFilter) -> Result<usize, StorageError>;

    /// Matching records plus a count of unreadable entries. Order is unspecified.
    async fn scan(&self, filter: &RecordFilter) -> Result<Scan, StorageError>;

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<AgentRecord>, StorageError> {
        Ok(self.scan(filter).await?.records)
    }
}
