// src/lib.rs

pub mod cli;
pub mod errors;
pub mod input;
pub mod logging;
pub mod order;
pub mod report;
pub mod request;
pub mod task;
pub mod types;

use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::errors::{Result, TaskorderError};
use crate::input::{TaskFile, load_and_validate};
use crate::order::OrderingEngine;
use crate::request::schedule;
use crate::types::ErrorReporting;

pub use crate::errors::{ValidationError, Violation};
pub use crate::order::Plan;
pub use crate::request::{ScheduleRequest, ScheduleResponse};
pub use crate::task::{DueDate, Task, TaskName};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading and validation
/// - the ordering engine
/// - text or JSON rendering
pub fn run(args: CliArgs) -> Result<()> {
    let file = load_and_validate(&args.input, args.input_format)?;
    info!(input = %args.input, tasks = file.tasks().len(), "task file loaded");

    if args.dry_run {
        print!("{}", report::render_dry_run(&file));
        debug!("dry-run complete (nothing ordered)");
        return Ok(());
    }

    let reporting = effective_reporting(&args, &file);

    match args.output {
        OutputFormat::Text => run_text(&file, reporting, args.batches),
        OutputFormat::Json => run_json(file, reporting),
    }
}

/// `--report-all` wins over the file's `[config].error_reporting`.
pub fn effective_reporting(args: &CliArgs, file: &TaskFile) -> ErrorReporting {
    if args.report_all {
        ErrorReporting::All
    } else {
        file.config().error_reporting
    }
}

fn run_text(file: &TaskFile, reporting: ErrorReporting, grouped: bool) -> Result<()> {
    let engine = OrderingEngine::with_reporting(reporting);
    match engine.plan(file.tasks()) {
        Ok(plan) => {
            print!("{}", report::render_plan(&plan, file.tasks(), grouped));
            Ok(())
        }
        Err(err) => {
            eprint!("{}", report::render_errors(&err));
            Err(TaskorderError::Validation(err))
        }
    }
}

fn run_json(file: TaskFile, reporting: ErrorReporting) -> Result<()> {
    let request = file.into_request();
    let response = schedule(&request, reporting);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_ok() {
        Ok(())
    } else {
        Err(TaskorderError::Rejected(response.errors().len()))
    }
}
