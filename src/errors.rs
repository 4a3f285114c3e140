// src/errors.rs

//! Crate-wide error types.
//!
//! [`ValidationError`] is what the ordering engine returns for bad task
//! sets. [`TaskorderError`] covers everything around it (reading files,
//! parsing, CLI plumbing).

use thiserror::Error;

use crate::task::TaskName;

/// A single reason a task set cannot be ordered.
///
/// The `Display` output of each variant is the user-facing message and is
/// kept stable for consumers that match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Task '{task}' depends on unknown task '{dependency}'.")]
    UnknownDependency {
        task: TaskName,
        dependency: TaskName,
    },

    #[error("Duplicate task name '{name}'.")]
    DuplicateName { name: TaskName },

    /// `involved` lists the tasks that sit on a cycle, sorted by name.
    /// Tasks that are only blocked by a cycle are not included.
    #[error("Cyclic dependency detected.")]
    Cycle { involved: Vec<TaskName> },
}

/// Non-empty list of violations. No order is produced alongside it.
///
/// Displays as the violation messages joined by a single space.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.messages().join(" "))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Returns `None` for an empty list; a validation error always carries
    /// at least one violation.
    pub fn new(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// User-facing messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }

    /// Members of the detected cycle, if the failure was a cycle.
    pub fn cycle_members(&self) -> Option<&[TaskName]> {
        self.violations.iter().find_map(|v| match v {
            Violation::Cycle { involved } => Some(involved.as_slice()),
            _ => None,
        })
    }
}

#[derive(Error, Debug)]
pub enum TaskorderError {
    #[error("Input error: {0}")]
    InputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The request was rejected and the errors were already written out
    /// in the requested output format.
    #[error("task set rejected with {0} error(s)")]
    Rejected(usize),
}

impl TaskorderError {
    /// Whether the user has already seen the details of this error in the
    /// command output.
    pub fn is_reported(&self) -> bool {
        matches!(self, TaskorderError::Validation(_) | TaskorderError::Rejected(_))
    }
}

pub type Result<T> = std::result::Result<T, TaskorderError>;
