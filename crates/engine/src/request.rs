// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request and response types for registry operations.

use roster_core::{AgentRecord, Lifespan, Metadata, Model, ScopeRequest};
use serde::Serialize;
use std::path::PathBuf;

use crate::ValidationError;

/// Find-or-create request.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub name: String,
    pub lifespan: Lifespan,
    /// Defaults to the lowest-cost model
    pub model: Option<Model>,
    /// Scope override for turn, context, session, and project records
    pub scope: Option<String>,
    pub session_id: Option<String>,
    /// Required for workflow records
    pub workflow_id: Option<String>,
    pub project_path: Option<PathBuf>,
    pub metadata: Metadata,
}

impl CreateRequest {
    pub fn new(name: impl Into<String>, lifespan: Lifespan) -> Self {
        Self {
            name: name.into(),
            lifespan,
            model: None,
            scope: None,
            session_id: None,
            workflow_id: None,
            project_path: None,
            metadata: Metadata::new(),
        }
    }

    /// Build from an untyped lifespan name, as received from a command line.
    pub fn parse(name: impl Into<String>, lifespan: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(name, lifespan.parse::<Lifespan>()?))
    }

    roster_core::setters! {
        set {
            metadata: Metadata,
        }
        option {
            model: Model,
            scope: String,
            session_id: String,
            workflow_id: String,
            project_path: PathBuf,
        }
    }

    pub(crate) fn scope_request(&self) -> ScopeRequest {
        ScopeRequest {
            scope: self.scope.clone(),
            session_id: self.session_id.clone(),
            workflow_id: self.workflow_id.clone(),
            project_path: self.project_path.clone(),
        }
    }
}

/// Request to start (or rejoin) an agent inside a workflow.
#[derive(Debug, Clone)]
pub struct StartWorkflow {
    pub workflow_id: String,
    pub name: String,
    pub model: Option<Model>,
    pub metadata: Metadata,
}

impl StartWorkflow {
    pub fn new(workflow_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            workflow_id: workflow_id.into(),
            name: name.into(),
            model: None,
            metadata: Metadata::new(),
        }
    }

    roster_core::setters! {
        set {
            metadata: Metadata,
        }
        option {
            model: Model,
        }
    }
}

impl From<StartWorkflow> for CreateRequest {
    fn from(start: StartWorkflow) -> Self {
        CreateRequest {
            model: start.model,
            workflow_id: Some(start.workflow_id),
            metadata: start.metadata,
            ..CreateRequest::new(start.name, Lifespan::Workflow)
        }
    }
}

/// Outcome of a find-or-create.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub record: AgentRecord,
    /// `false` when an existing record with the same name and scope was returned
    pub is_new: bool,
}
