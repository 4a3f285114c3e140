// src/input/validate.rs

use tracing::debug;

use crate::errors::{Result, TaskorderError};
use crate::input::model::{RawTaskFile, TaskFile};
use crate::task::Task;

impl TryFrom<RawTaskFile> for TaskFile {
    type Error = TaskorderError;

    fn try_from(raw: RawTaskFile) -> std::result::Result<Self, Self::Error> {
        let tasks = normalize_names(raw.task, raw.config.skip_unnamed)?;
        ensure_has_tasks(&tasks)?;
        validate_efforts(&tasks)?;
        Ok(TaskFile::new_unchecked(raw.config, tasks))
    }
}

/// Trim names and deal with blank ones according to `skip_unnamed`.
fn normalize_names(tasks: Vec<Task>, skip_unnamed: bool) -> Result<Vec<Task>> {
    let mut kept = Vec::with_capacity(tasks.len());

    for (pos, mut task) in tasks.into_iter().enumerate() {
        let trimmed = task.name.trim();
        if trimmed.is_empty() {
            if skip_unnamed {
                debug!(position = pos, "skipping task without a name");
                continue;
            }
            return Err(TaskorderError::InputError(format!(
                "task #{} has an empty name",
                pos + 1
            )));
        }
        if trimmed.len() != task.name.len() {
            task.name = trimmed.to_string();
        }
        kept.push(task);
    }

    Ok(kept)
}

fn ensure_has_tasks(tasks: &[Task]) -> Result<()> {
    if tasks.is_empty() {
        return Err(TaskorderError::InputError(
            "task file must contain at least one task".to_string(),
        ));
    }
    Ok(())
}

fn validate_efforts(tasks: &[Task]) -> Result<()> {
    for task in tasks {
        if !task.effort.is_finite() || task.effort < 0.0 {
            return Err(TaskorderError::InputError(format!(
                "task '{}' has invalid effort {} (must be a non-negative number)",
                task.name, task.effort
            )));
        }
    }
    Ok(())
}
