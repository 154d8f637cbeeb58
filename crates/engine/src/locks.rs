// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-key async locks.
//!
//! Find-or-create is a check-then-write sequence. Holding the lock for the
//! record's `(backend, name, scope)` across that sequence keeps two callers
//! in this process from both creating the same record. Nothing here
//! coordinates separate processes.

use parking_lot::Mutex;
use roster_core::Backend;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;

type LockKey = (Backend, String, String);

/// One key's mutex and the number of guards (held or waiting) that use it.
#[derive(Default)]
struct Slot {
    lock: Arc<tokio::sync::Mutex<()>>,
    users: usize,
}

#[derive(Default)]
pub(crate) struct KeyLocks {
    slots: Mutex<HashMap<LockKey, Slot>>,
}

impl KeyLocks {
    /// Wait for exclusive access to `(backend, name, scope)`.
    ///
    /// The returned guard is registered before waiting, so a caller that
    /// gives up mid-wait still releases its claim on the key.
    pub(crate) async fn lock(&self, backend: Backend, name: &str, scope: &str) -> KeyGuard<'_> {
        let key = (backend, name.to_string(), scope.to_string());
        let lock = {
            let mut slots = self.slots.lock();
            let slot = slots.entry(key.clone()).or_default();
            slot.users += 1;
            Arc::clone(&slot.lock)
        };
        let mut held = KeyGuard { locks: self, key, guard: None };
        held.guard = Some(lock.lock_owned().await);
        held
    }

    /// Number of keys currently held or awaited.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.lock().len()
    }

    fn release(&self, key: &LockKey) {
        let mut slots = self.slots.lock();
        if let Some(slot) = slots.get_mut(key) {
            slot.users = slot.users.saturating_sub(1);
            if slot.users == 0 {
                slots.remove(key);
            }
        }
    }
}

/// Releases the key on drop and forgets it once nobody else holds or
/// awaits it.
pub(crate) struct KeyGuard<'a> {
    locks: &'a KeyLocks,
    key: LockKey,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks.release(&self.key);
    }
}

#[cfg(test)]
#[path = "locks_tests.rs"]
mod tests;
