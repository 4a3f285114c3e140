// src/order/engine.rs

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::errors::{ValidationError, Violation};
use crate::order::cycle::cycle_members;
use crate::order::graph::DependencyGraph;
use crate::task::{Task, TaskName};
use crate::types::ErrorReporting;

/// Result of a successful sort, grouped by frontier.
///
/// Each batch holds the tasks that became eligible at the same time, already
/// sorted by due date then effort. Flattening the batches gives the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    batches: Vec<Vec<TaskName>>,
}

impl Plan {
    pub fn batches(&self) -> &[Vec<TaskName>] {
        &self.batches
    }

    /// Total number of scheduled tasks.
    pub fn len(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn order(&self) -> Vec<TaskName> {
        self.batches.iter().flatten().cloned().collect()
    }

    pub fn into_order(self) -> Vec<TaskName> {
        self.batches.into_iter().flatten().collect()
    }
}

/// Computes a recommended execution order for a task set.
///
/// The sort is Kahn's algorithm run one frontier at a time: every task whose
/// prerequisites are all scheduled forms the next batch, the batch is sorted
/// by due date then effort, and only then are its dependents released.
/// Tasks released by a batch always wait for the following batch, even if
/// they are more urgent than the rest of the current one.
///
/// The engine holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderingEngine {
    reporting: ErrorReporting,
}

impl OrderingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reporting(reporting: ErrorReporting) -> Self {
        Self { reporting }
    }

    /// Order `tasks`, or explain why they cannot be ordered.
    ///
    /// Callers are expected to reject an empty task list before getting
    /// here; an empty slice yields an empty order.
    pub fn sort(&self, tasks: &[Task]) -> Result<Vec<TaskName>, ValidationError> {
        self.plan(tasks).map(Plan::into_order)
    }

    /// Like [`sort`](Self::sort) but keeps the frontier grouping.
    pub fn plan(&self, tasks: &[Task]) -> Result<Plan, ValidationError> {
        let graph = match DependencyGraph::build(tasks, self.reporting) {
            Ok(graph) => graph,
            Err(err) => {
                warn!(errors = ?err.messages(), "task set rejected");
                return Err(err);
            }
        };

        if graph.is_empty() {
            debug!("no tasks to order");
            return Ok(Plan {
                batches: Vec::new(),
            });
        }

        let mut in_degree = graph.in_degrees().to_vec();
        let mut ready: Vec<usize> = graph.roots().collect();
        let mut batches: Vec<Vec<TaskName>> = Vec::new();
        let mut scheduled = 0usize;

        while !ready.is_empty() {
            let mut batch = std::mem::take(&mut ready);
            batch.sort_by(|&a, &b| by_urgency(graph.task(a), graph.task(b)).then(a.cmp(&b)));

            for &pos in batch.iter() {
                for &dependent in graph.dependents_of(pos) {
                    in_degree[dependent] -= 1;
                    if in_degree[dependent] == 0 {
                        ready.push(dependent);
                    }
                }
            }

            scheduled += batch.len();
            debug!(
                batch = batches.len(),
                size = batch.len(),
                released = ready.len(),
                "frontier scheduled"
            );
            batches.push(batch.into_iter().map(|pos| graph.task(pos).name.clone()).collect());
        }

        if scheduled != graph.len() {
            let involved = cycle_members(&graph, &in_degree);
            warn!(
                scheduled,
                total = graph.len(),
                ?involved,
                "cyclic dependency detected"
            );
            return Err(ValidationError::single(Violation::Cycle { involved }));
        }

        Ok(Plan { batches })
    }
}

/// Earlier due date first; among equal due dates, smaller effort first.
fn by_urgency(a: &Task, b: &Task) -> Ordering {
    a.due_date
        .cmp(&b.due_date)
        .then_with(|| a.effort.total_cmp(&b.effort))
}
