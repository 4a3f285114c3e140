#![allow(dead_code)]

use taskorder::input::{ConfigSection, RawTaskFile, TaskFile};
use taskorder::task::{DueDate, Task};
use taskorder::types::ErrorReporting;

/// Parse a `YYYY-MM-DD` (or longer) literal, panicking on bad test input.
pub fn due(s: &str) -> DueDate {
    s.parse().expect("invalid due date literal in test")
}

/// Builder for `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    /// New task due on 2024-01-01 with zero effort and no dependencies.
    pub fn new(name: &str) -> Self {
        Self {
            task: Task::new(name, 0.0, due("2024-01-01")),
        }
    }

    pub fn effort(mut self, effort: f64) -> Self {
        self.task.effort = effort;
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.task.due_date = due(date);
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for a list of tasks, optionally wrapped into a `TaskFile`.
pub struct TaskSetBuilder {
    config: ConfigSection,
    tasks: Vec<Task>,
}

impl TaskSetBuilder {
    pub fn new() -> Self {
        Self {
            config: ConfigSection::default(),
            tasks: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: TaskBuilder) -> Self {
        self.tasks.push(task.build());
        self
    }

    pub fn error_reporting(mut self, reporting: ErrorReporting) -> Self {
        self.config.error_reporting = reporting;
        self
    }

    pub fn skip_unnamed(mut self, val: bool) -> Self {
        self.config.skip_unnamed = val;
        self
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }

    pub fn build_raw(self) -> RawTaskFile {
        RawTaskFile {
            config: self.config,
            task: self.tasks,
        }
    }

    pub fn build_file(self) -> TaskFile {
        TaskFile::try_from(self.build_raw()).expect("Failed to build valid task file from builder")
    }
}

impl Default for TaskSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
