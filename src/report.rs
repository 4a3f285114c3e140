// src/report.rs

//! Human-readable rendering of plans, failures and dry runs.
//!
//! Everything here returns a `String` so the CLI decides where it goes
//! (stdout for results, stderr for errors).

use std::collections::HashMap;
use std::fmt::Write;

use crate::errors::ValidationError;
use crate::input::TaskFile;
use crate::order::Plan;
use crate::task::Task;

/// Render a successful plan as a numbered list.
///
/// With `grouped`, each frontier gets its own heading; numbering continues
/// across batches so the numbers are always positions in the order.
pub fn render_plan(plan: &Plan, tasks: &[Task], grouped: bool) -> String {
    let by_name: HashMap<&str, &Task> = tasks.iter().map(|t| (t.name.as_str(), t)).collect();
    let width = plan
        .batches()
        .iter()
        .flatten()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "Recommended order ({} tasks):", plan.len());

    let mut position = 0usize;
    for (idx, batch) in plan.batches().iter().enumerate() {
        if grouped {
            let _ = writeln!(out, "Batch {}:", idx + 1);
        }
        for name in batch {
            position += 1;
            match by_name.get(name.as_str()) {
                Some(task) => {
                    let _ = writeln!(
                        out,
                        "  {position:>3}. {name:<width$}  due {}  effort {}",
                        task.due_date, task.effort
                    );
                }
                None => {
                    let _ = writeln!(out, "  {position:>3}. {name}");
                }
            }
        }
    }

    out
}

/// Render validation errors, one per line, followed by the cycle members
/// when known.
pub fn render_errors(err: &ValidationError) -> String {
    let mut out = String::new();
    for message in err.messages() {
        let _ = writeln!(out, "error: {message}");
    }
    if let Some(members) = err.cycle_members() {
        if !members.is_empty() {
            let _ = writeln!(out, "  tasks on the cycle: {}", members.join(", "));
        }
    }
    out
}

/// Dry-run output: print config and tasks with their dependencies.
pub fn render_dry_run(file: &TaskFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "taskorder dry-run");
    let _ = writeln!(
        out,
        "  config.error_reporting = {:?}",
        file.config().error_reporting
    );
    let _ = writeln!(out, "  config.skip_unnamed = {}", file.config().skip_unnamed);
    let _ = writeln!(out);

    let _ = writeln!(out, "tasks ({}):", file.tasks().len());
    for task in file.tasks() {
        let _ = writeln!(out, "  - {}", task.name);
        let _ = writeln!(out, "      effort: {}", task.effort);
        let _ = writeln!(out, "      due: {}", task.due_date);
        if !task.dependencies.is_empty() {
            let _ = writeln!(out, "      after: {:?}", task.dependencies);
        }
    }

    out
}
