// src/request.rs

//! Transport-agnostic request/response shapes around the engine.
//!
//! Whatever exposes the engine (the CLI here, an HTTP handler elsewhere)
//! hands over a [`ScheduleRequest`] and gets back a [`ScheduleResponse`]
//! that serializes to either `{"order": [...]}` or `{"errors": [...]}`.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::ValidationError;
use crate::order::OrderingEngine;
use crate::task::{Task, TaskName};
use crate::types::ErrorReporting;

/// Message returned when a request carries no tasks at all.
pub const EMPTY_REQUEST_MESSAGE: &str = "Tasks cannot be empty.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default, alias = "task")]
    pub tasks: Vec<Task>,
}

impl ScheduleRequest {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScheduleResponse {
    Ordered {
        order: Vec<TaskName>,
    },
    Rejected {
        errors: Vec<String>,
        /// Tasks on a detected cycle; omitted for other failures.
        #[serde(skip_serializing_if = "Option::is_none")]
        cycle: Option<Vec<TaskName>>,
    },
}

impl ScheduleResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, ScheduleResponse::Ordered { .. })
    }

    pub fn order(&self) -> Option<&[TaskName]> {
        match self {
            ScheduleResponse::Ordered { order } => Some(order.as_slice()),
            ScheduleResponse::Rejected { .. } => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            ScheduleResponse::Ordered { .. } => &[],
            ScheduleResponse::Rejected { errors, .. } => errors,
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        ScheduleResponse::Rejected {
            errors: vec![message.into()],
            cycle: None,
        }
    }
}

impl From<ValidationError> for ScheduleResponse {
    fn from(err: ValidationError) -> Self {
        ScheduleResponse::Rejected {
            errors: err.messages(),
            cycle: err.cycle_members().map(<[TaskName]>::to_vec),
        }
    }
}

impl From<Result<Vec<TaskName>, ValidationError>> for ScheduleResponse {
    fn from(result: Result<Vec<TaskName>, ValidationError>) -> Self {
        match result {
            Ok(order) => ScheduleResponse::Ordered { order },
            Err(err) => err.into(),
        }
    }
}

/// Handle one scheduling request.
///
/// Empty requests are rejected here, before the engine is involved.
pub fn schedule(request: &ScheduleRequest, reporting: ErrorReporting) -> ScheduleResponse {
    if request.tasks.is_empty() {
        warn!("schedule request rejected: no tasks");
        return ScheduleResponse::rejected(EMPTY_REQUEST_MESSAGE);
    }

    let engine = OrderingEngine::with_reporting(reporting);
    let response: ScheduleResponse = engine.sort(&request.tasks).into();

    if response.is_ok() {
        info!(tasks = request.tasks.len(), "schedule computed");
    }
    response
}
