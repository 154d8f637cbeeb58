// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record filters shared by every storage backend.

use crate::agent_record::AgentRecord;
use crate::lifespan::Lifespan;
use serde::{Deserialize, Serialize};

/// Conjunction of optional equality constraints.
///
/// A record matches when every field that is set equals the record's
/// corresponding field. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<Lifespan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RecordFilter {
    /// Matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_lifespan(lifespan: Lifespan) -> Self {
        Self::default().lifespan(lifespan)
    }

    pub fn by_scope(scope: impl Into<String>) -> Self {
        Self::default().scope(scope)
    }

    crate::setters! {
        option {
            lifespan: Lifespan,
            scope: String,
            name: String,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lifespan.is_none() && self.scope.is_none() && self.name.is_none()
    }

    pub fn matches(&self, record: &AgentRecord) -> bool {
        self.lifespan.map_or(true, |l| l == record.lifespan)
            && self.scope.as_deref().map_or(true, |s| s == record.scope)
            && self.name.as_deref().map_or(true, |n| n == record.name)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
