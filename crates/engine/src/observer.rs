// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer sinks for registry notifications.
//!
//! Delivery is fire-and-forget: `notify` returns nothing, and the registry
//! behaves the same whether or not anyone is listening.

use roster_core::Notification;
use std::sync::Arc;

/// Receives every lifecycle notification the registry emits.
pub trait Observer: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<F> Observer for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn notify(&self, _notification: &Notification) {}
}

/// Logs each notification as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&self, notification: &Notification) {
        let event = &notification.event;
        let at = notification.at.to_rfc3339();
        if let Some(record) = event.record() {
            tracing::info!(
                event = event.kind(),
                %at,
                id = %record.id,
                name = %record.name,
                lifespan = %record.lifespan,
                scope = %record.scope,
                "registry event"
            );
        } else if let roster_core::RegistryEvent::CorruptEntriesSkipped { count } = event {
            tracing::warn!(event = event.kind(), %at, count, "skipped unreadable records");
        } else {
            tracing::info!(event = event.kind(), %at, count = event.count(), "registry event");
        }
    }
}

/// Forwards each notification to several observers in order.
#[derive(Clone, Default)]
pub struct FanoutObserver {
    sinks: Vec<Arc<dyn Observer>>,
}

impl FanoutObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn Observer>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl Observer for FanoutObserver {
    fn notify(&self, notification: &Notification) {
        for sink in &self.sinks {
            sink.notify(notification);
        }
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
