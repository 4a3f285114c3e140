// src/input/model.rs

use serde::Deserialize;

use crate::request::ScheduleRequest;
use crate::task::Task;
use crate::types::ErrorReporting;

/// Task file as read from TOML or JSON, before validation.
///
/// ```toml
/// [config]
/// error_reporting = "all"
///
/// [[task]]
/// name = "design"
/// effort = 4
/// due_date = "2024-01-01"
///
/// [[task]]
/// name = "build"
/// effort = 6.5
/// due_date = 2024-01-03
/// dependencies = ["design"]
/// ```
///
/// The JSON form is `{"config": {...}, "tasks": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTaskFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default, alias = "tasks")]
    pub task: Vec<Task>,
}

/// `[config]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigSection {
    /// `"first"` (default) or `"all"`.
    #[serde(default)]
    pub error_reporting: ErrorReporting,

    /// Drop tasks whose name is blank instead of rejecting the file.
    #[serde(default = "default_skip_unnamed")]
    pub skip_unnamed: bool,
}

fn default_skip_unnamed() -> bool {
    true
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            error_reporting: ErrorReporting::default(),
            skip_unnamed: default_skip_unnamed(),
        }
    }
}

/// A task file that passed field-level validation.
///
/// Names are trimmed and non-blank, efforts are finite and non-negative,
/// and there is at least one task. Dependency resolution is left to the
/// ordering engine.
#[derive(Debug, Clone)]
pub struct TaskFile {
    config: ConfigSection,
    tasks: Vec<Task>,
}

impl TaskFile {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: Vec<Task>) -> Self {
        Self { config, tasks }
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_request(self) -> ScheduleRequest {
        ScheduleRequest::new(self.tasks)
    }
}
