// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The lifecycle registry.
//!
//! ```text
//! create/resume/dispose
//!     │
//!     ├── ScopeResolver        lifespan + request -> scope
//!     ├── Backend route        lifespan -> one store instance
//!     │     Volatile  (ephemeral, turn, context)
//!     │     Session / Workflow / Project  (one DurableStore each)
//!     └── Observer             fire-and-forget notification
//! ```

use roster_core::{
    AgentRecord, Backend, CleanupTarget, Clock, Lifespan, Notification, RecordFilter, RecordId,
    RecordRef, RegistryEvent, ScopeResolver, SystemClock, WORKFLOW_ID_KEY,
};
use roster_storage::{DurableStore, RecordStore, Scan, StorageError, VolatileStore};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::locks::KeyLocks;
use crate::{
    CreateRequest, Created, NoopObserver, Observer, RegistryConfig, RegistryError, StartWorkflow,
    ValidationError,
};

/// Creates, resumes, enumerates, and disposes agent records.
///
/// Owns one volatile store and one durable store per durable lifespan.
/// Construct one per process (or per test) and share it by reference.
pub struct Registry<C: Clock = SystemClock> {
    resolver: ScopeResolver,
    volatile: VolatileStore,
    session: DurableStore,
    workflow: DurableStore,
    project: DurableStore,
    observer: Arc<dyn Observer>,
    clock: C,
    locks: KeyLocks,
}

impl Registry<SystemClock> {
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Registry<C> {
    pub fn with_clock(config: RegistryConfig, clock: C) -> Result<Self, RegistryError> {
        let base = &config.state_dir;
        Ok(Self {
            volatile: VolatileStore::new(),
            session: DurableStore::new(base, Lifespan::Session)?,
            workflow: DurableStore::new(base, Lifespan::Workflow)?,
            project: DurableStore::new(base, Lifespan::Project)?,
            resolver: ScopeResolver::new(config.ambient),
            observer: Arc::new(NoopObserver),
            clock,
            locks: KeyLocks::default(),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn resolver(&self) -> &ScopeResolver {
        &self.resolver
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn durable(&self, backend: Backend) -> Option<&DurableStore> {
        match backend {
            Backend::Volatile => None,
            Backend::Session => Some(&self.session),
            Backend::Workflow => Some(&self.workflow),
            Backend::Project => Some(&self.project),
        }
    }

    fn store(&self, backend: Backend) -> &dyn RecordStore {
        match backend {
            Backend::Volatile => &self.volatile,
            Backend::Session => &self.session,
            Backend::Workflow => &self.workflow,
            Backend::Project => &self.project,
        }
    }

    /// Stores to consult for `filter`: just the owning one when the filter
    /// names a lifespan, otherwise all of them.
    fn stores_for(&self, filter: &RecordFilter) -> Vec<&dyn RecordStore> {
        match filter.lifespan {
            Some(lifespan) => vec![self.store(lifespan.backend())],
            None => Backend::ALL.into_iter().map(|b| self.store(b)).collect(),
        }
    }

    fn emit(&self, event: RegistryEvent) {
        self.observer.notify(&Notification::new(self.clock.now(), event));
    }

    /// Check a request and derive its scope, before any storage access.
    fn validate(&self, request: &CreateRequest) -> Result<String, ValidationError> {
        if request.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let scope = self
            .resolver
            .resolve(request.lifespan, &request.scope_request())
            .ok_or(ValidationError::MissingWorkflowId)?;
        if let Some(store) = self.durable(request.lifespan.backend()) {
            if let Err(StorageError::InvalidKey { kind, value }) =
                store.record_path(&request.name, &scope)
            {
                return Err(ValidationError::UnsafeKey { kind, value });
            }
        }
        Ok(scope)
    }

    /// Find-or-create by `(name, scope)` within the lifespan's tier.
    ///
    /// An existing record is touched (and any request metadata merged in)
    /// rather than replaced, so repeated calls return the same id.
    pub async fn create(&self, request: CreateRequest) -> Result<Created, RegistryError> {
        let scope = self.validate(&request)?;
        let backend = request.lifespan.backend();
        let store = self.store(backend);
        let _key = self.locks.lock(backend, &request.name, &scope).await;

        if let Some(mut record) = store.find_by_name_and_scope(&request.name, &scope).await? {
            record.touch(self.clock.now());
            record.merge_metadata(&request.metadata);
            store.save(&record).await?;
            tracing::debug!(id = %record.id, name = %record.name, %scope, "create found existing record");
            self.emit(RegistryEvent::RecordResumed { record: RecordRef::from(&record) });
            return Ok(Created { record, is_new: false });
        }

        let mut metadata = request.metadata;
        if request.lifespan == Lifespan::Workflow {
            metadata.insert(WORKFLOW_ID_KEY.to_string(), scope.clone().into());
        }
        let record = AgentRecord::new(
            request.name,
            request.lifespan,
            scope,
            request.model.unwrap_or_default(),
            metadata,
            self.clock.now(),
        );
        store.save(&record).await?;
        tracing::debug!(id = %record.id, name = %record.name, lifespan = %record.lifespan, scope = %record.scope, "created record");
        self.emit(RegistryEvent::RecordCreated { record: RecordRef::from(&record) });
        Ok(Created { record, is_new: true })
    }

    /// Resume a record by name, searching turn, context, session,
    /// workflow, then project.
    ///
    /// Without a scope each tier is probed under its default scope; workflow
    /// records have none and so are only found with an explicit scope.
    pub async fn resume(
        &self,
        name: &str,
        scope: Option<&str>,
    ) -> Result<AgentRecord, RegistryError> {
        let mut probed: Vec<(Backend, String)> = Vec::new();
        for lifespan in Lifespan::RESUME_ORDER {
            let probe_scope = match scope {
                Some(s) => s.to_string(),
                None => match self.resolver.default_for(lifespan) {
                    Some(s) => s,
                    None => continue,
                },
            };
            let backend = lifespan.backend();
            if probed.iter().any(|(b, s)| *b == backend && *s == probe_scope) {
                continue;
            }

            let store = self.store(backend);
            let _key = self.locks.lock(backend, name, &probe_scope).await;
            if let Some(mut record) = store.find_by_name_and_scope(name, &probe_scope).await? {
                record.record_turn(self.clock.now());
                store.save(&record).await?;
                tracing::debug!(id = %record.id, turn_count = record.turn_count, "resumed record");
                self.emit(RegistryEvent::RecordResumed { record: RecordRef::from(&record) });
                return Ok(record);
            }
            probed.push((backend, probe_scope));
        }
        Err(RegistryError::NotFound { name: name.to_string(), scope: scope.map(str::to_string) })
    }

    /// Look a record up by id across every backend. Absence is `Ok(None)`.
    pub async fn get(&self, id: &RecordId) -> Result<Option<AgentRecord>, RegistryError> {
        for backend in Backend::ALL {
            if let Some(record) = self.store(backend).load_by_id(id).await? {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Dispose of one record. Returns `false` (and does nothing) if absent.
    pub async fn dispose(&self, id: &RecordId) -> Result<bool, RegistryError> {
        let Some(record) = self.get(id).await? else {
            return Ok(false);
        };
        self.store(record.lifespan.backend()).delete(id).await?;
        tracing::debug!(%id, name = %record.name, "disposed record");
        self.emit(RegistryEvent::RecordDisposed { record: RecordRef::from(&record) });
        Ok(true)
    }

    /// Dispose of every record with `lifespan`, returning the count.
    pub async fn dispose_by_lifespan(&self, lifespan: Lifespan) -> Result<usize, RegistryError> {
        let count = self
            .store(lifespan.backend())
            .delete_many(&RecordFilter::by_lifespan(lifespan))
            .await?;
        self.emit(RegistryEvent::BulkCleanup { target: CleanupTarget::Lifespan(lifespan), count });
        Ok(count)
    }

    /// Dispose of every record whose scope is `scope`, in every backend.
    ///
    /// Scope strings are not unique to a lifespan (a session id is also the
    /// default turn and context scope), so all stores are consulted.
    pub async fn dispose_by_scope(&self, scope: &str) -> Result<usize, RegistryError> {
        let filter = RecordFilter::by_scope(scope);
        let mut count = 0;
        for backend in Backend::ALL {
            count += self.store(backend).delete_many(&filter).await?;
        }
        self.emit(RegistryEvent::BulkCleanup {
            target: CleanupTarget::Scope(scope.to_string()),
            count,
        });
        Ok(count)
    }

    /// Every record matching `filter`, across backends, in no particular order.
    pub async fn list(&self, filter: &RecordFilter) -> Result<Vec<AgentRecord>, RegistryError> {
        let mut all = Scan::default();
        for store in self.stores_for(filter) {
            let scan = store.scan(filter).await?;
            all.records.extend(scan.records);
            all.skipped += scan.skipped;
        }
        self.report_skipped(all.skipped);
        Ok(all.records)
    }

    fn report_skipped(&self, count: usize) {
        if count > 0 {
            self.emit(RegistryEvent::CorruptEntriesSkipped { count });
        }
    }

    /// Find-or-create an agent inside a workflow.
    pub async fn start_workflow(&self, start: StartWorkflow) -> Result<Created, RegistryError> {
        let workflow_id = start.workflow_id.clone();
        let created = self.create(start.into()).await?;
        if created.is_new {
            self.emit(RegistryEvent::WorkflowStarted {
                workflow_id,
                record: RecordRef::from(&created.record),
            });
        }
        Ok(created)
    }

    /// Dispose of every workflow-lifespan record in `workflow_id`.
    ///
    /// Records of other lifespans that happen to share the scope string are
    /// left alone.
    pub async fn complete_workflow(&self, workflow_id: &str) -> Result<usize, RegistryError> {
        let count = self.workflow.delete_many(&RecordFilter::by_scope(workflow_id)).await?;
        self.emit(RegistryEvent::WorkflowCompleted { workflow_id: workflow_id.to_string(), count });
        Ok(count)
    }

    /// Workflow-lifespan records belonging to `workflow_id`.
    pub async fn workflow_agents(
        &self,
        workflow_id: &str,
    ) -> Result<Vec<AgentRecord>, RegistryError> {
        self.list(&RecordFilter::by_lifespan(Lifespan::Workflow).scope(workflow_id)).await
    }

    /// Records of any lifespan scoped to `session_id`.
    pub async fn session_agents(
        &self,
        session_id: &str,
    ) -> Result<Vec<AgentRecord>, RegistryError> {
        self.list(&RecordFilter::by_scope(session_id)).await
    }

    /// Record counts per lifespan, zero included.
    pub async fn stats(&self) -> Result<BTreeMap<Lifespan, usize>, RegistryError> {
        let mut counts: BTreeMap<Lifespan, usize> =
            Lifespan::ALL.into_iter().map(|l| (l, 0)).collect();
        for record in self.list(&RecordFilter::all()).await? {
            *counts.entry(record.lifespan).or_default() += 1;
        }
        Ok(counts)
    }

    /// Host boundary: the current turn ended.
    pub async fn on_turn_end(&self) -> Result<usize, RegistryError> {
        self.dispose_by_lifespan(Lifespan::Turn).await
    }

    /// Host boundary: the session `session_id` ended.
    pub async fn on_session_end(&self, session_id: &str) -> Result<usize, RegistryError> {
        self.dispose_by_scope(session_id).await
    }
}

#[cfg(test)]
#[path = "registry_tests/mod.rs"]
mod tests;
