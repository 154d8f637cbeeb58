// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-tree store for session, workflow, and project records.
//!
//! One instance per durable lifespan, rooted at `<base>/<lifespan>`:
//!
//! ```text
//! <base>/session/<scope>/<name>.json
//! <base>/workflow/<workflow-id>/<name>.json
//! <base>/project/<name>.json        (scope kept only inside the document)
//! ```
//!
//! Documents are written in place without a temp-file rename, so a crash
//! mid-write can leave a truncated file. Scans skip unparseable documents
//! and report how many they skipped.

use async_trait::async_trait;
use roster_core::{AgentRecord, Backend, Lifespan, RecordFilter, RecordId};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{RecordStore, Scan, StorageError};

const EXTENSION: &str = "json";

/// How documents are laid out under the store root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// `<root>/<scope>/<name>.json`
    Scoped,
    /// `<root>/<name>.json`
    Flat,
}

/// Outcome of reading one document.
enum Read {
    Missing,
    Corrupt(serde_json::Error),
    Record(AgentRecord),
}

/// A parsed document and where it lives.
struct Entry {
    path: PathBuf,
    record: AgentRecord,
}

#[derive(Default)]
struct Entries {
    entries: Vec<Entry>,
    skipped: usize,
}

/// JSON-document store for a single durable lifespan.
#[derive(Debug, Clone)]
pub struct DurableStore {
    lifespan: Lifespan,
    root: PathBuf,
}

impl DurableStore {
    /// Store for `lifespan` under `base`. Fails for volatile lifespans.
    pub fn new(base: impl AsRef<Path>, lifespan: Lifespan) -> Result<Self, StorageError> {
        if !lifespan.is_durable() {
            return Err(StorageError::NotDurable(lifespan));
        }
        Ok(Self { lifespan, root: base.as_ref().join(lifespan.as_str()) })
    }

    pub fn lifespan(&self) -> Lifespan {
        self.lifespan
    }

    /// Directory holding this lifespan's documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn layout(&self) -> Layout {
        match self.lifespan {
            Lifespan::Project => Layout::Flat,
            _ => Layout::Scoped,
        }
    }

    /// Deterministic document path for `(name, scope)`.
    pub fn record_path(&self, name: &str, scope: &str) -> Result<PathBuf, StorageError> {
        check_segment("name", name)?;
        let file = format!("{}.{}", name, EXTENSION);
        match self.layout() {
            Layout::Flat => Ok(self.root.join(file)),
            Layout::Scoped => {
                check_segment("scope", scope)?;
                Ok(self.root.join(scope).join(file))
            }
        }
    }

    /// Directories a scan under `filter` must visit.
    async fn scan_dirs(&self, filter: &RecordFilter) -> Result<Vec<PathBuf>, StorageError> {
        match (self.layout(), filter.scope.as_deref()) {
            (Layout::Flat, _) => Ok(vec![self.root.clone()]),
            (Layout::Scoped, Some(scope)) => match check_segment("scope", scope) {
                Ok(()) => Ok(vec![self.root.join(scope)]),
                Err(_) => Ok(Vec::new()),
            },
            (Layout::Scoped, None) => {
                let mut dirs = Vec::new();
                let Some(mut reader) = read_dir(&self.root).await? else {
                    return Ok(dirs);
                };
                while let Some(entry) =
                    reader.next_entry().await.map_err(StorageError::io(&self.root))?
                {
                    let is_dir = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
                    if is_dir {
                        dirs.push(entry.path());
                    }
                }
                Ok(dirs)
            }
        }
    }

    /// Parse every document matching `filter`, skipping unreadable ones.
    async fn entries(&self, filter: &RecordFilter) -> Result<Entries, StorageError> {
        let mut found = Entries::default();
        if filter.lifespan.is_some_and(|l| l != self.lifespan) {
            return Ok(found);
        }

        for dir in self.scan_dirs(filter).await? {
            let Some(mut reader) = read_dir(&dir).await? else {
                continue;
            };
            while let Some(entry) = reader.next_entry().await.map_err(StorageError::io(&dir))? {
                let path = entry.path();
                let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
                if !is_file || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                    continue;
                }
                let read = read_record(&path).await?;
                match read {
                    Read::Record(record) if filter.matches(&record) => {
                        found.entries.push(Entry { path, record })
                    }
                    Read::Record(_) | Read::Missing => {}
                    Read::Corrupt(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "skipping unreadable record");
                        found.skipped += 1;
                    }
                }
            }
        }
        Ok(found)
    }

    /// Remove scope directories that no longer contain anything.
    async fn prune(&self, dirs: BTreeSet<PathBuf>) {
        if self.layout() == Layout::Flat {
            return;
        }
        for dir in dirs {
            if dir == self.root || !dir.starts_with(&self.root) {
                continue;
            }
            let empty = match tokio::fs::read_dir(&dir).await {
                Ok(mut reader) => matches!(reader.next_entry().await, Ok(None)),
                Err(_) => false,
            };
            if !empty {
                continue;
            }
            match tokio::fs::remove_dir(&dir).await {
                Ok(()) => tracing::debug!(dir = %dir.display(), "pruned empty scope directory"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "failed to prune scope directory")
                }
            }
        }
    }

    async fn remove_file(path: &Path) -> Result<(), StorageError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(path)(e)),
        }
    }
}

#[async_trait]
impl RecordStore for DurableStore {
    fn backend(&self) -> Backend {
        self.lifespan.backend()
    }

    async fn save(&self, record: &AgentRecord) -> Result<(), StorageError> {
        let path = self.record_path(&record.name, &record.scope)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(StorageError::io(parent))?;
        }
        let mut text = serde_json::to_string_pretty(record)
            .map_err(|source| StorageError::Encode { path: path.clone(), source })?;
        text.push('\n');
        tokio::fs::write(&path, text).await.map_err(StorageError::io(&path))?;
        tracing::debug!(id = %record.id, path = %path.display(), "saved durable record");
        Ok(())
    }

    /// Linear scan: documents are addressed by name, not id.
    async fn load_by_id(&self, id: &RecordId) -> Result<Option<AgentRecord>, StorageError> {
        let found = self.entries(&RecordFilter::all()).await?;
        Ok(found.entries.into_iter().map(|e| e.record).find(|r| r.id == *id))
    }

    async fn find_by_name_and_scope(
        &self,
        name: &str,
        scope: &str,
    ) -> Result<Option<AgentRecord>, StorageError> {
        let Ok(path) = self.record_path(name, scope) else {
            return Ok(None);
        };
        let read = read_record(&path).await?;
        match read {
            Read::Record(record) if record.scope == scope && record.name == name => Ok(Some(record)),
            Read::Record(_) | Read::Missing => Ok(None),
            Read::Corrupt(e) => {
                tracing::warn!(path = %path.display(), error = %e, "treating unreadable record as absent");
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StorageError> {
        let found = self.entries(&RecordFilter::all()).await?;
        if let Some(entry) = found.entries.into_iter().find(|e| e.record.id == *id) {
            Self::remove_file(&entry.path).await?;
            tracing::debug!(%id, path = %entry.path.display(), "deleted durable record");
            if let Some(parent) = entry.path.parent() {
                self.prune(BTreeSet::from([parent.to_path_buf()])).await;
            }
        }
        Ok(())
    }

    async fn delete_many(&self, filter: &RecordFilter) -> Result<usize, StorageError> {
        let found = self.entries(filter).await?;
        let mut touched = BTreeSet::new();
        for entry in &found.entries {
            Self::remove_file(&entry.path).await?;
            if let Some(parent) = entry.path.parent() {
                touched.insert(parent.to_path_buf());
            }
        }
        self.prune(touched).await;
        tracing::debug!(lifespan = %self.lifespan, count = found.entries.len(), ?filter, "deleted durable records");
        Ok(found.entries.len())
    }

    async fn scan(&self, filter: &RecordFilter) -> Result<Scan, StorageError> {
        let found = self.entries(filter).await?;
        Ok(Scan {
            records: found.entries.into_iter().map(|e| e.record).collect(),
            skipped: found.skipped,
        })
    }
}

/// Reject values that would escape or nest within the store tree.
fn check_segment(kind: &'static str, value: &str) -> Result<(), StorageError> {
    let bad = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(|c: char| matches!(c, '/' | '\\' | '\0'));
    if bad {
        return Err(StorageError::InvalidKey { kind, value: value.to_string() });
    }
    Ok(())
}

/// Open a directory for iteration; `None` when it does not exist.
async fn read_dir(dir: &Path) -> Result<Option<tokio::fs::ReadDir>, StorageError> {
    match tokio::fs::read_dir(dir).await {
        Ok(reader) => Ok(Some(reader)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::io(dir)(e)),
    }
}

async fn read_record(path: &Path) -> Result<Read, StorageError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Read::Missing),
        Err(e) => return Err(StorageError::io(path)(e)),
    };
    Ok(match serde_json::from_slice(&bytes) {
        Ok(record) => Read::Record(record),
        Err(e) => Read::Corrupt(e),
    })
}

#[cfg(test)]
#[path = "durable_tests.rs"]
mod tests;
