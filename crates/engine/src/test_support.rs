// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for the engine crate.

use crate::Observer;
use parking_lot::Mutex;
use roster_core::{Notification, RegistryEvent};

/// Observer that keeps every notification for later assertions.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<RegistryEvent> {
        self.seen.lock().iter().map(|n| n.event.clone()).collect()
    }

    pub(crate) fn kinds(&self) -> Vec<&'static str> {
        self.seen.lock().iter().map(|n| n.event.kind()).collect()
    }

    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub(crate) fn clear(&self) {
        self.seen.lock().clear();
    }
}

impl Observer for RecordingObserver {
    fn notify(&self, notification: &Notification) {
        self.seen.lock().push(notification.clone());
    }
}
